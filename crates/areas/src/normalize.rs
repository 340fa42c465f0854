//! Area-name normalization.
//!
//! Applied exactly once at load time (every name entering a [`crate::Dataset`]
//! is already normalized) and once more at CSV-export time when the caller
//! asks for accent stripping. Idempotent: normalizing a normalized name is
//! the identity.

/// Uppercases `raw` and folds Latin diacritics to plain ASCII letters.
pub fn normalize_name(raw: &str) -> String {
    fold_diacritics(raw).to_uppercase()
}

/// Replaces accented Latin letters with their base letter, preserving case.
/// Characters without a mapping pass through unchanged.
pub fn fold_diacritics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match fold_char(ch) {
            Some(base) => out.push(base),
            None => out.push(ch),
        }
    }
    out
}

fn fold_char(ch: char) -> Option<char> {
    let base = match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        _ => return None,
    };
    Some(base)
}
