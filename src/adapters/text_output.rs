use crate::core::engine::Matching;
use crate::domain::model::{MatchReport, OutputFormat, Pairing, PreferenceInput, ProposerId};
use crate::utils::error::{MatchError, Result};

/// 依提議方編號遞增，透過 proposer -> proposee 方向取得配對名稱。
pub fn build_report(input: &PreferenceInput, matching: &Matching) -> MatchReport {
    let pairings = (0..matching.size())
        .map(ProposerId)
        .map(|proposer| {
            let proposee = matching.partner_of_proposer(proposer);
            Pairing {
                proposer: input.proposer_names[proposer.index()].clone(),
                proposee: input.proposee_names[proposee.index()].clone(),
            }
        })
        .collect();

    MatchReport {
        pairings,
        stats: matching.stats(),
    }
}

pub fn render(report: &MatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report.pairings)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(report: &MatchReport) -> String {
    report
        .pairings
        .iter()
        .map(|pairing| format!("{} / {}\n", pairing.proposer, pairing.proposee))
        .collect()
}

fn render_csv(report: &MatchReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for pairing in &report.pairings {
        writer.serialize(pairing)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|e| MatchError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| MatchError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
