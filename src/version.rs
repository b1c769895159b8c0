use {
    anyhow::{anyhow, Context, Result},
    chrono::{DateTime, NaiveDate, Timelike, Utc},
    num_bigint::BigUint,
    regex::Regex,
    std::sync::LazyLock,
};

/// Day zero of the calendar version.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2015, 11, 24) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

const SECONDS_PER_DAY: i64 = 86_400;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit run pattern"));
static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+").expect("valid letter run pattern"));

/// Release maturity, tested against the label in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Snapshot,
    Alpha,
    Beta,
    Rc,
    Stable,
}

impl Channel {
    /// Substring search, first keyword wins. A label such as "alpha-beta" is
    /// therefore `Alpha`.
    pub fn detect(label: &str) -> Self {
        [
            ("snapshot", Channel::Snapshot),
            ("alpha", Channel::Alpha),
            ("beta", Channel::Beta),
            ("rc", Channel::Rc),
        ]
        .into_iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|(_, channel)| channel)
        .unwrap_or(Channel::Stable)
    }

    pub fn offset(self) -> u64 {
        match self {
            Channel::Snapshot => 0,
            Channel::Alpha => 1000,
            Channel::Beta => 2000,
            Channel::Rc => 3000,
            Channel::Stable => 4000,
        }
    }
}

fn digit_runs(label: &str) -> Vec<&str> {
    DIGIT_RUN.find_iter(label).map(|m| m.as_str()).collect()
}

fn letter_runs(label: &str) -> Vec<&str> {
    LETTER_RUN.find_iter(label).map(|m| m.as_str()).collect()
}

/// Whole days since [`EPOCH`], rounded toward negative infinity.
pub fn day_number(now: &DateTime<Utc>) -> i64 {
    let epoch = EPOCH.and_time(chrono::NaiveTime::MIN).and_utc();
    now.signed_duration_since(epoch)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Time of day in 14.4 minute slots, always in `0..100`.
pub fn time_slot(now: &DateTime<Utc>) -> u32 {
    let minutes = now.hour() * 60 + now.minute();
    minutes * 10 / 144
}

/// Builds the calendar version written into the release, e.g.
/// `1.2.3620.57beta` for label `1.2-beta`.
///
/// Major and minor are the first two digit runs of `label`, copied verbatim.
/// Every lowercase letter run is appended as the suffix.
pub fn get_ver(label: &str, now: &DateTime<Utc>) -> Result<String> {
    let digits = digit_runs(label);
    let [major, minor, ..] = digits.as_slice() else {
        return Err(anyhow!(
            "invalid version label {label:?}: expected at least major and minor numbers"
        ));
    };

    let suffix = letter_runs(label).concat();

    Ok(format!(
        "{major}.{minor}.{}.{}{suffix}",
        day_number(now),
        time_slot(now),
    ))
}

/// Encodes `label` as an integer that orders releases for package managers.
///
/// The channel offset is added to the last digit run, then every run is zero
/// padded to four digits and concatenated. An offset run wider than four
/// digits is kept whole. The result is unbounded, so labels with many
/// components never overflow.
pub fn get_int_ver(label: &str) -> Result<BigUint> {
    let digits = digit_runs(label);
    let Some((last, rest)) = digits.split_last() else {
        return Err(anyhow!(
            "invalid version label {label:?}: no version numbers found"
        ));
    };

    let last = last
        .parse::<BigUint>()
        .context(format!("invalid version number {last:?} in {label:?}"))?
        + Channel::detect(label).offset();

    let mut encoded = String::new();
    for component in rest {
        encoded.push_str(&format!("{component:0>4}"));
    }
    encoded.push_str(&format!("{:0>4}", last.to_string()));

    encoded
        .parse::<BigUint>()
        .context(format!("invalid integer version {encoded:?} for {label:?}"))
}
