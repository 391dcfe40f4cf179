#[cfg(windows)]
fn main() {
    use std::fs::File;
    use std::io::BufWriter;

    // Create ICO from PNG with proper transparency
    let icon_path = "assets/app.ico";

    // Load PNG and create ICO (use appicon.png for exe icon)
    let img = image::open("assets/appicon.png").expect("Failed to load appicon.png");

    // Create multiple sizes for the ICO
    let sizes = [16, 32, 48, 256];
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for size in sizes {
        let resized = img.resize_exact(size, size, image::imageops::FilterType::Lanczos3);
        let rgba = resized.to_rgba8();
        let icon_image = ico::IconImage::from_rgba_data(size, size, rgba.into_raw());
        icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image).unwrap());
    }

    // Write ICO file
    let file = File::create(icon_path).expect("Failed to create ICO file");
    icon_dir.write(BufWriter::new(file)).expect("Failed to write ICO");

    // Set up Windows resources
    let mut res = winres::WindowsResource::new();
    res.set_icon(icon_path);
    res.compile().unwrap();

    println!("cargo:rerun-if-changed=assets/appicon.png");
}

#[cfg(not(windows))]
fn main() {}
