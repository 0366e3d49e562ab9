#[derive(Debug, Clone)]
pub struct ScanBarcodeInput {
    pub barcode: String,
}

#[derive(Debug, Clone)]
pub struct ScanImageInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
}
