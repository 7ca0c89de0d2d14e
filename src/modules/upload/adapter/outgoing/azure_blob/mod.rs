mod connection_string;
mod object_storage_azure;
mod shared_key;

pub use connection_string::{StorageAccount, StorageAccountError};
pub use object_storage_azure::AzureBlobStorage;
