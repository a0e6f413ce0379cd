use super::{Roster, RosterBuilder};
use crate::error::{CohortError, CohortResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// A parsed affinity table before any entity is registered.
///
/// The first header cell is a label and is ignored; the remaining header
/// cells name the column entities. Each record starts with a row entity name.
pub struct RawAffinityTable {
    pub columns: Vec<String>,
    pub rows: Vec<(String, Vec<String>)>,
}

pub fn load_roster<P: AsRef<Path>>(path: P) -> CohortResult<Roster> {
    let path = path.as_ref();
    info!("📂 Loading affinity table: {}", path.display());
    let file = File::open(path)?;
    load_roster_from_reader(file)
}

pub fn load_roster_from_reader<R: Read>(reader: R) -> CohortResult<Roster> {
    let table = read_table(reader)?;
    build_roster(&table)
}

pub fn read_table<R: Read>(reader: R) -> CohortResult<RawAffinityTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().skip(1).map(str::to_string).collect();
    if let Some(pos) = columns.iter().position(String::is_empty) {
        return Err(CohortError::Validation(format!(
            "Header column {} has no entity name",
            pos + 2
        )));
    }

    let mut rows = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.iter().all(str::is_empty) {
            continue;
        }
        let name = rec.get(0).unwrap_or_default();
        if name.is_empty() {
            return Err(CohortError::Validation(format!(
                "Row {} has scores but no entity name",
                line + 2
            )));
        }
        let cells = rec.iter().skip(1).map(str::to_string).collect();
        rows.push((name.to_string(), cells));
    }

    Ok(RawAffinityTable { columns, rows })
}

/// Registers header names, then row names, and derives the triangular rows.
///
/// The score for `i < j` comes from cell `(row i, column j)`, falls back to
/// the mirrored cell `(row j, column i)`, and is 0 when both are blank or
/// absent.
pub fn build_roster(table: &RawAffinityTable) -> CohortResult<Roster> {
    let mut builder = RosterBuilder::new();

    let mut col_of: HashMap<usize, usize> = HashMap::new();
    for (pos, name) in table.columns.iter().enumerate() {
        let entity = builder.register(name);
        if col_of.contains_key(&entity.index) {
            warn!("Column '{}' appears more than once; keeping the first", name);
            continue;
        }
        col_of.insert(entity.index, pos);
    }

    let mut row_of: HashMap<usize, usize> = HashMap::new();
    for (pos, (name, _)) in table.rows.iter().enumerate() {
        let entity = builder.register(name);
        if row_of.contains_key(&entity.index) {
            warn!("Row '{}' appears more than once; keeping the first", name);
            continue;
        }
        row_of.insert(entity.index, pos);
    }

    let names: Vec<String> = builder
        .registry()
        .all_entities()
        .iter()
        .map(|e| e.name().to_string())
        .collect();

    let cell = |r: usize, c: usize| -> CohortResult<Option<f64>> {
        let (Some(&rp), Some(&cp)) = (row_of.get(&r), col_of.get(&c)) else {
            return Ok(None);
        };
        let raw = match table.rows[rp].1.get(cp) {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(None),
        };
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            Ok(_) => Err(CohortError::Validation(format!(
                "Score '{}' at row '{}', column '{}' is not finite",
                raw, names[r], names[c]
            ))),
            Err(_) => Err(CohortError::Validation(format!(
                "Score '{}' at row '{}', column '{}' is not a number",
                raw, names[r], names[c]
            ))),
        }
    };

    let n = names.len();
    for i in 0..n {
        let mut row = Vec::with_capacity(n - i - 1);
        for j in (i + 1)..n {
            let score = match cell(i, j)? {
                Some(v) => v,
                None => cell(j, i)?.unwrap_or(0.0),
            };
            row.push(score);
        }
        builder.append_row(row);
    }

    debug!(
        "   -> {} columns, {} rows, {} entities",
        table.columns.len(),
        table.rows.len(),
        n
    );

    builder.freeze()
}

pub fn save_roster<P: AsRef<Path>>(path: P, roster: &Roster) -> CohortResult<()> {
    let path = path.as_ref();
    info!("💾 Writing affinity table: {}", path.display());
    let file = File::create(path)?;
    write_roster(file, roster)
}

/// Writes the full symmetric square table in registry order.
pub fn write_roster<W: Write>(writer: W, roster: &Roster) -> CohortResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let entities = roster.entities();

    let mut header = Vec::with_capacity(entities.len() + 1);
    header.push(String::new());
    header.extend(entities.iter().map(|e| e.name().to_string()));
    wtr.write_record(&header)?;

    for a in entities {
        let mut record = Vec::with_capacity(entities.len() + 1);
        record.push(a.name().to_string());
        for b in entities {
            let score = if a.index == b.index {
                0.0
            } else {
                roster
                    .matrix()
                    .score_between(a.index.min(b.index), a.index.max(b.index))?
            };
            record.push(score.to_string());
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
