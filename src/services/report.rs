//! Report service - renders bookings in a period into a .docx table.

use crate::core::{AppError, AppState};
use crate::dtos::ReportQueryDTO;
use crate::entities::User;
use crate::repositories::reservation::ReportEntry;
use axum::{
    Extension,
    extract::{Json, Query, State},
};
use chrono::{DateTime, Utc};
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

const REPORT_EXT: &str = ".docx";
const FILE_STAMP: &str = "%Y-%m-%dT%H-%M-%S";

const REPORT_HEADING: &str = "Отчет о бронированиях переговорных комнат";
const REPORT_COLUMNS: [&str; 5] = [
    "№",
    "Кто бронировал",
    "Время бронирования",
    "Цель бронирования",
    "Номер комнаты",
];

/// Generates the booking report for the window and returns the path of
/// the written document. Reservations of any status qualify; the optional
/// room filter narrows the report to one room.
#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, room_id = ?params.room_id))]
pub async fn get_reservations_report(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<ReportQueryDTO>,
) -> Result<Json<String>, AppError> {
    debug!("Generating reservations report");
    let entries = state
        .reservation
        .find_report_entries(params.room_id, &params.reserved_from, &params.reserved_to)
        .await?;

    let rows = report_rows(&entries);
    let path = write_report(
        &state.report_dir,
        &params.reserved_from,
        &params.reserved_to,
        &rows,
    )?;

    info!("Report with {} entries written to {:?}", entries.len(), path);
    Ok(Json(path.to_string_lossy().into_owned()))
}

/// One table row per reservation: sequence id, booker, formatted time
/// range, purpose, room number.
fn report_rows(entries: &[ReportEntry]) -> Vec<[String; 5]> {
    entries
        .iter()
        .map(|entry| {
            [
                entry.reservation_id.to_string(),
                entry.username.clone(),
                format!(
                    "{} - {}",
                    entry.reserved_from.format("%Y-%m-%d %H:%M"),
                    entry.reserved_to.format("%Y-%m-%d %H:%M")
                ),
                entry.purpose_of_booking.clone(),
                entry.room_number.to_string(),
            ]
        })
        .collect()
}

/// Writes the document under `dir`; the file name encodes the query
/// bounds, so repeated reports over the same window overwrite each other.
fn write_report(
    dir: &Path,
    reserved_from: &DateTime<Utc>,
    reserved_to: &DateTime<Utc>,
    rows: &[[String; 5]],
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;

    let file_name = format!(
        "{}_{}{}",
        reserved_from.format(FILE_STAMP),
        reserved_to.format(FILE_STAMP),
        REPORT_EXT
    );
    let path = dir.join(file_name);

    let file = fs::File::create(&path)?;
    build_document(rows).build().pack(file).map_err(|e| {
        AppError::internal_server_error("Report rendering error").with_details(e.to_string())
    })?;

    Ok(path)
}

fn build_document(rows: &[[String; 5]]) -> Docx {
    let mut table_rows = vec![table_row(&REPORT_COLUMNS.map(String::from))];
    table_rows.extend(rows.iter().map(table_row));

    Docx::new()
        .add_paragraph(
            Paragraph::new()
                .style("Heading1")
                .add_run(Run::new().add_text(REPORT_HEADING)),
        )
        .add_table(Table::new(table_rows))
}

fn table_row(cells: &[String; 5]) -> TableRow {
    TableRow::new(
        cells
            .iter()
            .map(|text| {
                TableCell::new()
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: i64, from_hour: u32, to_hour: u32) -> ReportEntry {
        ReportEntry {
            reservation_id: id,
            username: "alice".to_string(),
            reserved_from: Utc.with_ymd_and_hms(2024, 1, 1, from_hour, 0, 0).unwrap(),
            reserved_to: Utc.with_ymd_and_hms(2024, 1, 1, to_hour, 0, 0).unwrap(),
            purpose_of_booking: "Standup".to_string(),
            room_number: 12,
        }
    }

    #[test]
    fn rows_format_the_time_range() {
        let rows = report_rows(&[entry(1, 10, 11)]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][1], "alice");
        assert_eq!(rows[0][2], "2024-01-01 10:00 - 2024-01-01 11:00");
        assert_eq!(rows[0][3], "Standup");
        assert_eq!(rows[0][4], "12");
    }

    #[test]
    fn one_row_per_reservation() {
        let rows = report_rows(&[entry(1, 10, 11), entry(2, 12, 13)]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "2");
    }

    #[test]
    fn empty_report_has_no_data_rows() {
        assert!(report_rows(&[]).is_empty());
    }

    #[test]
    fn file_name_encodes_the_query_bounds() {
        let dir = std::env::temp_dir().join("mrbs-report-naming-test");
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

        let path = write_report(&dir, &from, &to, &report_rows(&[entry(1, 10, 11)])).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "2024-01-01T00-00-00_2024-01-02T00-00-00.docx"
        );
        assert!(path.metadata().unwrap().len() > 0);
    }
}
