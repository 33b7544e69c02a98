pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{CleanerError, CleanerResult};
pub use validation::{validate_task, validate_batch};
pub use formats::{SvgFormat, format_from_extension, is_svgz};
pub use fs::{
    get_file_size,
    output_folder,
    ensure_dir,
    compressed_path,
    remove_file_quietly,
};
