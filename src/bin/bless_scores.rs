use activity_points::{CategoryCatalog, CertificateScorer, ScoreTrace, ScoringPipeline};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Deserialize, Serialize)]
struct GoldenScore {
    id: u32,
    #[serde(flatten)]
    trace: ScoreTrace,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = PathBuf::from("tests/golden/scores.jsonl");
    let pipeline = ScoringPipeline::new(CategoryCatalog::standard())?;
    let reader = BufReader::new(File::open(&path)?);
    let mut scores = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let gs: GoldenScore = serde_json::from_str(&line)?;
        let trace = pipeline.trace(&gs.trace.text);
        scores.push(GoldenScore { id: gs.id, trace });
    }
    let mut writer = BufWriter::new(File::create(&path)?);
    for s in scores {
        serde_json::to_writer(&mut writer, &s)?;
        writeln!(&mut writer)?;
    }
    Ok(())
}
