use image::ImageFormat;

/// Header facts about an image that opened successfully. Pixel data is never
/// read, so this is all a backend gets to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}
