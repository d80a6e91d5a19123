use std::path::PathBuf;

use image::{DynamicImage, Rgb, RgbImage};
use imgfilter::{Command, Dispatcher, NoticeLevel, Settings};

/// Writes a gradient test image, then every filter of the bank next to it
fn main() -> anyhow::Result<()> {
    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "filtered".to_string()));
    std::fs::create_dir_all(&out_dir)?;

    let mut img = RgbImage::new(800, 600);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let r = (x * 255 / 800) as u8;
        let g = (y * 255 / 600) as u8;
        *pixel = Rgb([r, g, 128]);
    }
    let source = out_dir.join("source.png");
    DynamicImage::ImageRgb8(img).save(&source)?;
    println!("Created {} (800x600 RGB gradient)", source.display());

    let mut dispatcher = Dispatcher::headless(&Settings::default());
    dispatcher.dispatch(Command::Open(source));

    let filters: Vec<_> = dispatcher.bank().iter().copied().collect();
    for filter in filters {
        dispatcher.dispatch(Command::ApplyFilter(filter));
        let target = out_dir.join(format!("{}.png", filter.name()));
        if let Some(notice) = dispatcher.dispatch(Command::Save(target)).notice {
            match notice.level {
                NoticeLevel::Info => println!("{:<16} {}", filter.label(), notice.message),
                NoticeLevel::Error => anyhow::bail!("{}", notice.message),
            }
        }
    }

    Ok(())
}
