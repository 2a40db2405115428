use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "subtitle-linker")]
#[command(about = "Match archived subtitle files to media files and place them side by side")]
pub struct Cli {
    /// Source directory containing subtitle zip archives
    #[arg(long = "subtitle_zip_files_dir")]
    pub subtitle_zip_files_dir: Option<PathBuf>,

    /// Directory of media files to receive subtitles
    #[arg(long = "target_dir")]
    pub target_dir: Option<PathBuf>,

    /// Staging directory for extracted subtitles; a fresh platform temp
    /// directory is used when omitted
    #[arg(long = "temp_storage_dir")]
    pub temp_storage_dir: Option<PathBuf>,
}
