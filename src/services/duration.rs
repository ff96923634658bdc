use once_cell::sync::Lazy;
use regex::Regex;

/// Returned for anything that is not a `PT..` duration.
pub const FALLBACK_DURATION: &str = "0:00";

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration regex is valid")
});

/// Converts an ISO-8601 time duration (`PT#H#M#S`) to `H:MM:SS`, or `M:SS` under an hour.
///
/// Components overflow into the next unit, so `PT90M` renders as `1:30:00`.
/// Input that does not start with `PT` yields [`FALLBACK_DURATION`].
pub fn iso8601_to_hms(duration: &str) -> String {
    let Some(caps) = DURATION_RE.captures(duration) else {
        return FALLBACK_DURATION.to_string();
    };

    let component = |index: usize| -> Option<u64> {
        caps.get(index)
            .map_or(Some(0), |m| m.as_str().parse::<u64>().ok())
    };

    let total = match (component(1), component(2), component(3)) {
        (Some(h), Some(m), Some(s)) => h
            .checked_mul(3600)
            .and_then(|h| m.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(s)),
        _ => None,
    };
    let Some(total) = total else {
        return FALLBACK_DURATION.to_string();
    };

    let hh = total / 3600;
    let mm = (total % 3600) / 60;
    let ss = total % 60;

    if hh > 0 {
        format!("{}:{:02}:{:02}", hh, mm, ss)
    } else {
        format!("{}:{:02}", mm, ss)
    }
}
