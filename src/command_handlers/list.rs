use crate::linker::Linker;
use crate::registry::{Listing, Registry};
use crate::store::{RecordStore, ToolRecord};
use anyhow::Result;

pub fn run_list<S: RecordStore, L: Linker>(
    registry: &Registry<S, L>,
    name: Option<&str>,
) -> Result<()> {
    let name = name.filter(|n| *n != "all");
    let listing = registry.list(name)?;
    print!("{}", render(&listing, registry.linker()));
    Ok(())
}

pub fn render<L: Linker>(listing: &Listing, linker: &L) -> String {
    let records: &[ToolRecord] = match listing {
        Listing::All(records) => records,
        Listing::One(record) => std::slice::from_ref(record),
    };
    if records.is_empty() {
        return "\nNo entries found\n\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        out.push_str(&record.id);
        out.push('\n');
        for (i, version) in record.versions.iter().enumerate() {
            let marker = if i == record.active { " ▸ " } else { "   " };
            out.push_str(&format!("{marker}{}: {version}\n", i + 1));
        }
        if let Some(note) = drift_note(record, linker) {
            out.push_str(&format!("   ({note})\n"));
        }
        out.push('\n');
    }
    out
}

fn drift_note<L: Linker>(record: &ToolRecord, linker: &L) -> Option<String> {
    match linker.current(&record.id) {
        Ok(Some(target)) if target == record.active_version() => None,
        Ok(Some(target)) => Some(format!(
            "symlink points at {target}; run 'clivm switch {}' to repair",
            record.id
        )),
        Ok(None) => Some(format!(
            "symlink missing; run 'clivm switch {}' to repair",
            record.id
        )),
        Err(e) => Some(e.to_string()),
    }
}
