use stripbooth::{BrandStyle, EncodedPhoto, ReviewStage, SessionContext, StripFormat};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let photos = (0..4u8)
        .map(|i| synthetic_photo(640, 480, [60 + 40 * i, 90, 160]))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let session = SessionContext {
        photos,
        count: 4,
        timestamp: "2026-08-25 14:02".to_string(),
        format: StripFormat::Portrait,
    };

    let mut stage = ReviewStage::from_session(session, BrandStyle::default());
    stage.add_sticker("heart");
    stage.add_sticker("star");
    stage.regenerate()?;

    if let Some(preview) = stage.preview() {
        let name = stage.download_file_name();
        std::fs::write(&name, &preview.jpeg)?;
        println!("wrote {name} ({} bytes)", preview.jpeg.len());
    }
    Ok(())
}

fn synthetic_photo(w: u32, h: u32, rgb: [u8; 3]) -> anyhow::Result<EncodedPhoto> {
    let img = image::RgbImage::from_pixel(w, h, image::Rgb(rgb));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img).write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )?;
    Ok(EncodedPhoto::new(bytes))
}
