use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `rows` random but valid quote requests.
pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["principal", "rate", "tenure"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let principal: u32 = rng.gen_range(10_000..=5_000_000);
        let rate_bps: u32 = rng.gen_range(0..=2400);
        let tenure: u32 = rng.gen_range(1..=360);
        wtr.write_record([
            principal.to_string(),
            format!("{}.{:02}", rate_bps / 100, rate_bps % 100),
            tenure.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
