pub mod scan_barcode;
pub mod scan_image;
