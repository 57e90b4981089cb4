/// Outbound contact dispatch
///
/// Every "order" action in the storefront resolves to a link: either a
/// wa.me chat link with a pre-filled message, or a fixed external page.
/// Links open in the system browser, fire-and-forget; a failure to open
/// is logged and otherwise swallowed, there is nothing the UI could do
/// about it.

/// WhatsApp recipient for all chat links
const WA_NUMBER: &str = "62895374651500";

/// External price-list page for the paraphrase service
const PARAFRASE_URL: &str = "https://s.id/cekbiayaparafrase";

/// Build a wa.me chat link with a URL-encoded pre-filled message
pub fn wa_link(text: &str) -> String {
    format!("https://wa.me/{}?text={}", WA_NUMBER, urlencoding::encode(text))
}

/// The fixed actions offered by the services section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    /// Plagiarism check
    Turnitin,
    /// Plagiarism check plus AI detection
    TurnitinAi,
    /// Paraphrasing; points at the external price list instead of chat
    Parafrase,
    /// Manuscript cleanup (table of contents, bibliography, Mendeley)
    Naskah,
    /// Journal publication consulting
    Jurnal,
}

impl ServiceAction {
    /// The link this action opens when its card is activated
    pub fn link(self) -> String {
        match self {
            ServiceAction::Turnitin => wa_link("Halo Ka, Saya Mau Cek Turnitin"),
            ServiceAction::TurnitinAi => wa_link("Halo Ka, Saya Mau Cek Turnitin AI"),
            ServiceAction::Parafrase => PARAFRASE_URL.to_string(),
            ServiceAction::Naskah => wa_link(
                "Halo Ka, Saya Mau Jasa Perbaikan Naskah \
                 (Daftar Isi, Daftar Pustaka, Mendeley, atau lainnya)",
            ),
            ServiceAction::Jurnal => wa_link("Halo Ka, Saya Mau Konsultasi untuk Publish Jurnal"),
        }
    }
}

/// Chat link for ordering a product from its card
pub fn order_product_link(title: &str) -> String {
    wa_link(&format!("Halo Ka, saya mau pesan: {title}"))
}

/// Chat link for a premium app picked from the preset list
pub fn preset_app_link(name: &str) -> String {
    wa_link(&format!("Halo Ka, Saya mau order {name} Premium"))
}

/// Chat link for a premium app typed into the custom-app prompt.
///
/// Returns `None` when the input is empty after trimming: declining the
/// prompt must not open anything.
pub fn custom_app_link(input: &str) -> Option<String> {
    let name = input.trim();
    if name.is_empty() {
        return None;
    }
    Some(wa_link(&format!("Halo Ka, saya mau order {name} Premium")))
}

/// Open a link in the system browser without blocking the UI thread.
///
/// Spawn blocking because the platform opener shells out to a child
/// process. The result only ever feeds a log line.
pub async fn open_link(url: String) -> Result<(), String> {
    tokio::task::spawn_blocking(move || open::that(&url).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("task join error: {e}"))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wa_link_encodes_message() {
        assert_eq!(
            wa_link("Halo Ka, Saya Mau Cek Turnitin"),
            "https://wa.me/62895374651500?text=Halo%20Ka%2C%20Saya%20Mau%20Cek%20Turnitin"
        );
    }

    #[test]
    fn test_turnitin_text_decodes_exactly() {
        let link = ServiceAction::Turnitin.link();
        let encoded = link.split("?text=").nth(1).unwrap();
        assert_eq!(
            urlencoding::decode(encoded).unwrap(),
            "Halo Ka, Saya Mau Cek Turnitin"
        );
    }

    #[test]
    fn test_parafrase_uses_external_page() {
        assert_eq!(ServiceAction::Parafrase.link(), "https://s.id/cekbiayaparafrase");
    }

    #[test]
    fn test_naskah_message_survives_encoding() {
        let link = ServiceAction::Naskah.link();
        let encoded = link.split("?text=").nth(1).unwrap();
        assert_eq!(
            urlencoding::decode(encoded).unwrap(),
            "Halo Ka, Saya Mau Jasa Perbaikan Naskah \
             (Daftar Isi, Daftar Pustaka, Mendeley, atau lainnya)"
        );
    }

    #[test]
    fn test_product_order_message() {
        let link = order_product_link("Cek Turnitin Instan");
        let encoded = link.split("?text=").nth(1).unwrap();
        assert_eq!(
            urlencoding::decode(encoded).unwrap(),
            "Halo Ka, saya mau pesan: Cek Turnitin Instan"
        );
    }

    #[test]
    fn test_preset_and_custom_app_casing_differs() {
        // The preset path capitalizes "Saya", the custom path does not
        let preset = preset_app_link("Netflix");
        let custom = custom_app_link("Netflix").unwrap();
        assert!(preset.contains("Saya%20mau%20order%20Netflix%20Premium"));
        assert!(custom.contains("saya%20mau%20order%20Netflix%20Premium"));
    }

    #[test]
    fn test_declined_custom_prompt_opens_nothing() {
        assert_eq!(custom_app_link(""), None);
        assert_eq!(custom_app_link("   "), None);
    }

    #[test]
    fn test_custom_app_input_is_trimmed() {
        let link = custom_app_link("  CapCut  ").unwrap();
        let encoded = link.split("?text=").nth(1).unwrap();
        assert_eq!(
            urlencoding::decode(encoded).unwrap(),
            "Halo Ka, saya mau order CapCut Premium"
        );
    }

    #[tokio::test]
    async fn test_open_link_reports_failure() {
        // An empty URL cannot be opened by any platform handler
        let result = open_link(String::new()).await;
        assert!(result.is_err());
    }
}
