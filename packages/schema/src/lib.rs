use std::{
    env,
    fs::create_dir_all,
    io::Error as IoError,
    path::{Path, PathBuf},
};

use thiserror::Error as ThisError;

const SCHEMA_DIR: &str = "schema";

/// Create the `schema` directory under the base directory passed as the first
/// command line argument and return its path
pub fn prep_out_dir() -> Result<PathBuf, Error> {
    env::args()
        .nth(1)
        .ok_or(Error::NoDirProvided())
        .and_then(|base_dir| prep_schema_dir(Path::new(&base_dir)))
}

fn prep_schema_dir(base_dir: &Path) -> Result<PathBuf, Error> {
    if base_dir.try_exists()? {
        let out_dir = base_dir.join(SCHEMA_DIR);
        create_dir_all(&out_dir)?;
        Ok(out_dir)
    } else {
        Err(Error::DirNotExist(base_dir.display().to_string()))
    }
}

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("[Schema] Directory not provided")]
    NoDirProvided(),

    #[error("[Schema] {0}")]
    Create(#[from] IoError),

    #[error("[Schema] The path '{0}' does not exist")]
    DirNotExist(String),
}
