pub mod file_transferer;
pub mod s3_file_transferer_impl;
