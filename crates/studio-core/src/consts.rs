/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Index of the alpha channel within a pixel.
pub const ALPHA: usize = 3;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;

/// Sepia tone matrix, one row per output channel (R, G, B).
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// 3x3 sharpen kernel, row-major.
pub const SHARPEN_KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// Maximum number of snapshots kept on the undo stack.
pub const HISTORY_CAPACITY: usize = 20;

/// JPEG quality used when the format is picked from the file extension.
pub const DEFAULT_JPEG_QUALITY: f32 = 0.92;

/// Lowest accepted JPEG quality scalar.
pub const JPEG_QUALITY_MIN: f32 = 0.1;

/// Highest accepted JPEG quality scalar.
pub const JPEG_QUALITY_MAX: f32 = 1.0;

/// Title prefix shown by presentation collaborators.
pub const APP_TITLE: &str = "Image Studio";
