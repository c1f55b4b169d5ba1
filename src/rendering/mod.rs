pub mod overlay;
pub mod png_codec;

pub use overlay::{annotated_file_name, render_overlay};
pub use png_codec::{decode_gray, encode_gray, encode_rgb, read_gray_png, write_rgb_png};
