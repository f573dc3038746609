/// Effective result limit, with precedence: command arg -> global `--limit`
/// -> configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}
