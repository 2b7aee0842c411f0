pub const CERTIFICATE_BUTTON_SELECTOR: &str = ".show-certificate[data-cert]";
pub const CERT_ATTRIBUTE: &str = "data-cert";
pub const CERTIFICATES_DIR: &str = "Assets/Certificates/";
pub const POPUP_BLOCKED_MESSAGE: &str =
    "Please allow popups for this website to view certificates.";

/// Relative URL of a certificate file. The file is not checked for existence.
pub fn certificate_path(cert_name: &str) -> String {
    format!("{CERTIFICATES_DIR}{cert_name}")
}
