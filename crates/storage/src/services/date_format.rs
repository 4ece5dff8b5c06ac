use chrono::{Locale, NaiveDate, NaiveTime};

const ISO_DATE: &str = "%Y-%m-%d";

/// Formats calendar dates as short month, numeric day and year in a fixed
/// locale, e.g. `Mar 5, 2024` for `en_US`, `5 mars 2024` for `fr_FR` or
/// `2024年3月5日` for `ja_JP`. CJK and Hungarian locales are year-first,
/// `en_US` and `en_PH` month-first, the rest day-first.
///
/// Dates are rendered from their own fields: the formatter anchors them at
/// midnight without applying any offset, so the displayed day is the stored
/// day in every timezone.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    locale: Locale,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}

impl DateFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Resolves a POSIX locale name such as `de_DE.UTF-8` or `pt_BR@euro`.
    /// Returns `None` for names chrono has no data for.
    pub fn from_locale_name(name: &str) -> Option<Self> {
        let base = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        Locale::try_from(base.as_str()).ok().map(Self::new)
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(self.pattern(), self.locale)
            .to_string()
    }

    /// Formats an ISO `YYYY-MM-DD` string. Anything unparsable is returned
    /// as given.
    pub fn format_str(&self, date: &str) -> String {
        match NaiveDate::parse_from_str(date, ISO_DATE) {
            Ok(date) => self.format(date),
            Err(_) => date.to_string(),
        }
    }

    fn pattern(&self) -> &'static str {
        match self.locale {
            Locale::en_US | Locale::en_PH => "%b %-d, %Y",
            Locale::ja_JP | Locale::zh_CN | Locale::zh_TW | Locale::zh_HK | Locale::zh_SG => {
                "%Y年%-m月%-d日"
            }
            Locale::ko_KR => "%Y년 %-m월 %-d일",
            Locale::hu_HU => "%Y. %b %-d.",
            _ => "%-d %b %Y",
        }
    }
}
