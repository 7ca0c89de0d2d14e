mod presign_upload;

pub use presign_upload::*;
