use crate::config::{STAGGER_CAP_MS, STAGGER_STEP_MS};

/// Entrance delay for the `index`-th reveal item inside one block.
pub fn stagger_delay_ms(index: usize) -> u32 {
    let step = u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(STAGGER_STEP_MS))
        .unwrap_or(u32::MAX);
    step.min(STAGGER_CAP_MS)
}

pub fn delay_value(index: usize) -> String {
    format!("{}ms", stagger_delay_ms(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_step_then_cap() {
        let delays: Vec<u32> = (0..7).map(stagger_delay_ms).collect();
        assert_eq!(delays, vec![0, 80, 160, 240, 320, 320, 320]);
        assert_eq!(stagger_delay_ms(usize::MAX), 320);
        assert_eq!(delay_value(2), "160ms");
    }
}
