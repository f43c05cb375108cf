/// Phone number behind the contact button, in international format
/// without the leading plus, as the WhatsApp API expects it.
pub const CONTACT_PHONE: &str = "543442604355";

pub const CONTACT_MESSAGE: &str =
    "Hola 👋, te quería consultar por los servicios de jardinería 🪴";

pub fn whatsapp_link() -> String {
    format!(
        "https://api.whatsapp.com/send?phone={}&text={}",
        CONTACT_PHONE,
        urlencoding::encode(CONTACT_MESSAGE)
    )
}

/// One before/after photo pair shown in the comparison slider.
#[derive(Clone, Copy, PartialEq)]
pub struct ImagePair {
    pub before: &'static str,
    pub after: &'static str,
}

/// Pairs the autoplay rotates through, one per completed sweep.
pub const SAMPLE_PAIRS: &[ImagePair] = &[
    ImagePair {
        before: "/assets/sample-1-before.webp",
        after: "/assets/sample-1-after.webp",
    },
    ImagePair {
        before: "/assets/sample-2-before.webp",
        after: "/assets/sample-2-after.webp",
    },
    ImagePair {
        before: "/assets/sample-3-before.webp",
        after: "/assets/sample-3-after.webp",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_the_message() {
        let link = whatsapp_link();
        assert!(link.starts_with(
            "https://api.whatsapp.com/send?phone=543442604355&text=Hola%20"
        ));
        assert!(!link.contains(' '));
        // The emoji survive as percent-encoded UTF-8.
        assert!(link.contains("%F0%9F%91%8B"));
    }
}
