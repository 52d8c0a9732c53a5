//! Records commands - list and inspect Berita Acara records

use limbah::api::{ApiClient, BeritaAcara};
use limbah::output::{OutputMode, RecordDetailResult, RecordListResult, RecordRow};

use crate::cli::app::RecordsAction;

fn row(record: BeritaAcara) -> RecordRow {
    RecordRow {
        id: record.id,
        approval_number: record.approval_number,
        department: record.department,
        waste_description: record.waste_description,
        status: record.status,
        created_at: record.created_at,
    }
}

/// Dispatch a records subcommand
pub fn records(base_url: &str, action: RecordsAction, mode: OutputMode) -> anyhow::Result<()> {
    let client = ApiClient::new(base_url);

    match action {
        RecordsAction::List {
            page,
            per_page,
            search,
            status,
        } => {
            let result =
                client.berita_acara(page, per_page, search.as_deref(), status.as_deref())?;

            RecordListResult {
                page: result.page,
                page_count: result.page_count(),
                total: result.total,
                records: result.items.into_iter().map(row).collect(),
            }
            .render(mode);
        },
        RecordsAction::Show { id } => {
            let record = client.berita_acara_by_id(&id)?;
            RecordDetailResult { record: row(record) }.render(mode);
        },
        RecordsAction::Approval { number } => {
            let record = client.approval_by_number(&number)?;
            RecordDetailResult { record: row(record) }.render(mode);
        },
    }

    Ok(())
}
