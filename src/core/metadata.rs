//! File name convention:
//! `YEAR UNIVERSITY AUTHOR LANGUAGE DISSTYPE GENDER[ ADDINFO].txt`

use crate::domain::model::BookMetadata;
use crate::utils::error::{ConvertError, Result};

pub const TEXT_EXTENSION: &str = ".txt";

const REQUIRED_FIELDS: usize = 6;
const WITH_EXTRA_INFO: usize = 7;

pub fn file_stem(file_name: &str) -> &str {
    file_name.strip_suffix(TEXT_EXTENSION).unwrap_or(file_name)
}

pub fn parse_file_name(file_name: &str) -> Result<BookMetadata> {
    let tokens: Vec<&str> = file_stem(file_name).split(' ').collect();

    let (fields, extra_info) = match tokens.len() {
        REQUIRED_FIELDS => (&tokens[..], None),
        WITH_EXTRA_INFO => (&tokens[..REQUIRED_FIELDS], Some(tokens[REQUIRED_FIELDS].to_string())),
        found => {
            return Err(ConvertError::FilenameTokens {
                file: file_name.to_string(),
                found,
            })
        }
    };

    Ok(BookMetadata {
        year: fields[0].to_string(),
        institution: fields[1].to_string(),
        author: fields[2].to_string(),
        language: fields[3].to_string(),
        dissertation_type: fields[4].to_string(),
        gender: fields[5].to_string(),
        extra_info,
    })
}
