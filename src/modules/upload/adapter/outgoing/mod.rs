pub mod azure_blob;
