mod ffprobe_info;
mod file_tools;
mod path_validator;
mod sequence_matcher;
mod video_scanner;

pub use ffprobe_info::{BitrateProvider, FfprobeBitrateProvider, MediaInfo, get_media_info};
pub use file_tools::delete_file;
pub use path_validator::validate_directory_exists;
pub use sequence_matcher::{MatchBlock, SequenceMatcher, similarity};
pub use video_scanner::scan_video_files;
