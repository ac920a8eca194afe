//! Stylistic filter kernels.
//!
//! Every kernel is a pure function from a [`PixelBuffer`](crate::buffer::PixelBuffer)
//! to a new buffer of identical dimensions. None of them can fail, and all of
//! them accept 1x1 images and kernels larger than the image.
//!
//! # Border Handling
//!
//! - Median replicates the edge pixel
//! - Sobel, Laplacian and Gaussian reflect about the edge without repeating it
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::filters::{median, warm};
//! use retouch_core::KernelSize;
//!
//! let smooth = median(&buffer, KernelSize::new(5));
//! let toned = warm(&smooth, 40);
//! ```

mod border;
mod contrast;
mod gaussian;
mod greyscale;
mod laplacian;
mod median;
mod sobel;
mod tint;

pub use contrast::contrast_stretch;
pub use gaussian::{gaussian, gaussian_blur, kernel_size_for_sigma, sigma_for_kernel_size};
pub use greyscale::greyscale;
pub use laplacian::{edge_enhance, DEFAULT_EDGE_STRENGTH};
pub use median::median;
pub use sobel::sobel;
pub use tint::{cold, warm, COLD_WEIGHTS, INTENSITY_LIMIT, WARM_WEIGHTS};
