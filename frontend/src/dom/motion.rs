/// Reduced-motion preference, read once when the app boots and handed down
/// through context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Motion {
    pub reduced: bool,
}

impl Motion {
    pub fn detect() -> Self {
        let reduced = web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        log::debug!("prefers-reduced-motion: {}", reduced);
        Motion { reduced }
    }
}
