use super::{attr_of, select_all, text_of};
use crate::model::{DayOfWeek, HourRange, Timetable};
use scraper::Html;

/// Extracts opening hours from the `.opening-hours.mb30` table
///
/// Each row names its day in a `td[itemprop]` cell (Spanish day names) and
/// its hours in `span[itemprop=opens]` / `span[itemprop=closes]`. A row
/// without a recognizable day files its hours under
/// [`DayOfWeek::Unknown`]. Rows sharing a day accumulate in page order.
///
/// Closed days are left out: a row with neither an `opens` nor a `closes`
/// span (such as `domingo | Cerrado`) adds no range, and a day with no
/// ranges has no entry.
pub fn extract_timetable(document: &Html) -> Timetable {
    let mut timetable = Timetable::new();

    for row in select_all(document.root_element(), ".opening-hours.mb30 table tr") {
        let mut day = DayOfWeek::Unknown;
        for cell in select_all(row, "td[itemprop]") {
            let label = text_of(cell);
            day = DayOfWeek::from_label(&label);
            if day == DayOfWeek::Unknown {
                tracing::warn!("Unknown day of week '{}'", label.trim());
            }
        }

        let mut range = HourRange::default();
        let mut has_hours = false;
        for span in select_all(row, "span[itemprop]") {
            let value = text_of(span).trim().to_string();
            match attr_of(span, "itemprop") {
                Some("opens") => range.start = value,
                Some("closes") => range.end = value,
                other => {
                    tracing::warn!("Invalid open/close marker {:?}", other);
                    continue;
                }
            }
            has_hours = true;
        }

        if has_hours {
            timetable.entry(day).or_default().push(range);
        }
    }

    timetable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::parse_document;

    fn row(day: &str, opens: &str, closes: &str) -> String {
        format!(
            r#"<tr><td itemprop="dayOfWeek">{}</td>
               <td><span itemprop="opens">{}</span> - <span itemprop="closes">{}</span></td></tr>"#,
            day, opens, closes
        )
    }

    fn table(rows: &[String]) -> String {
        format!(
            r#"<html><body><div class="opening-hours mb30"><table>{}</table></div></body></html>"#,
            rows.concat()
        )
    }

    fn range(start: &str, end: &str) -> HourRange {
        HourRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_split_shift_keeps_row_order() {
        let html = table(&[
            row("lunes", "09:00", "12:00"),
            row("lunes", "14:00", "19:00"),
        ]);
        let timetable = extract_timetable(&parse_document(&html));

        assert_eq!(timetable.len(), 1);
        assert_eq!(
            timetable[&DayOfWeek::Monday],
            vec![range("09:00", "12:00"), range("14:00", "19:00")]
        );
    }

    #[test]
    fn test_several_days() {
        let html = table(&[
            row("martes", "10:00", "18:00"),
            row("sábado", "10:00", "13:00"),
        ]);
        let timetable = extract_timetable(&parse_document(&html));

        assert_eq!(timetable[&DayOfWeek::Tuesday], vec![range("10:00", "18:00")]);
        assert_eq!(timetable[&DayOfWeek::Saturday], vec![range("10:00", "13:00")]);
    }

    #[test]
    fn test_unrecognized_day_goes_to_unknown() {
        let html = table(&[row("feriados", "10:00", "12:00")]);
        let timetable = extract_timetable(&parse_document(&html));
        assert_eq!(timetable[&DayOfWeek::Unknown], vec![range("10:00", "12:00")]);
    }

    #[test]
    fn test_row_without_day_cell_goes_to_unknown() {
        let html = table(&[
            r#"<tr><td><span itemprop="opens">08:00</span><span itemprop="closes">16:00</span></td></tr>"#
                .to_string(),
        ]);
        let timetable = extract_timetable(&parse_document(&html));
        assert_eq!(timetable[&DayOfWeek::Unknown], vec![range("08:00", "16:00")]);
    }

    #[test]
    fn test_day_row_without_hours_adds_nothing() {
        let html = table(&[r#"<tr><td itemprop="dayOfWeek">domingo</td><td>Cerrado</td></tr>"#
            .to_string()]);
        let timetable = extract_timetable(&parse_document(&html));
        assert!(timetable.is_empty());
    }

    #[test]
    fn test_no_table() {
        assert!(extract_timetable(&parse_document("<p>24 horas</p>")).is_empty());
    }
}
