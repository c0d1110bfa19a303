use anyhow::Result;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::Write as _;

mod index;
mod io;
mod split;
mod util;

use io::ArrayRecord;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "satsplit-rust", author, version, about = "De-novo decomposition of satellite DNA arrays into monomers", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decompose tandem repeat arrays into monomer fragments
    Decompose {
        /// Input file with arrays (FASTA or TRF .dat)
        input: String,
        /// Input format: auto / fasta / trf
        #[arg(short = 'f', long, default_value = "auto")]
        format: String,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        /// Maximum candidate cut-sequence length
        #[arg(long, default_value_t = split::DEFAULT_DEPTH)]
        depth: usize,
        /// Substring support cutoff (adaptive to array length if omitted)
        #[arg(long)]
        cutoff: Option<usize>,
        /// Also save a monomer DB to this path
        #[arg(long)]
        db: Option<String>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Summarize a previously saved monomer DB
    Stats {
        /// Path to monomer DB (.sdb)
        db: String,
        /// Number of top monomers to print
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Decompose {
            input,
            format,
            out,
            depth,
            cutoff,
            db,
            threads,
        } => run_decompose(
            &input,
            &format,
            out.as_deref(),
            depth,
            cutoff,
            db.as_deref(),
            threads,
        ),
        Commands::Stats { db, top } => run_stats(&db, top),
    }
}

fn read_records(input: &str, format: &str) -> Result<Vec<ArrayRecord>> {
    let fh = std::fs::File::open(input)
        .map_err(|e| anyhow::anyhow!("cannot open input file '{}': {}", input, e))?;
    let buf = std::io::BufReader::new(fh);

    let is_trf = match format {
        "trf" => true,
        "fasta" => false,
        "auto" => input.ends_with(".dat") || input.ends_with(".trf"),
        other => anyhow::bail!("unknown input format '{}'", other),
    };

    let mut records = Vec::new();
    if is_trf {
        let mut reader = io::trf::TrfReader::new(buf);
        while let Some(rec) = reader.next_record()? {
            records.push(rec);
        }
    } else {
        let mut reader = io::fasta::FastaReader::new(buf);
        while let Some(rec) = reader.next_record()? {
            records.push(rec);
        }
    }
    Ok(records)
}

fn run_decompose(
    input: &str,
    format: &str,
    out_path: Option<&str>,
    depth: usize,
    cutoff: Option<usize>,
    db_path: Option<&str>,
    threads: usize,
) -> Result<()> {
    let records = read_records(input, format)?;
    if records.is_empty() {
        anyhow::bail!("input file '{}' contains no arrays", input);
    }
    let total_len: usize = records.iter().map(|r| r.seq.len()).sum();

    println!("input: {}", input);
    println!("arrays: {}", records.len());
    println!("total_len: {}", total_len);

    let decompose_one = |rec: &ArrayRecord| {
        let cutoff = cutoff.unwrap_or_else(|| split::adaptive_cutoff(rec.seq.len()));
        split::decompose(&rec.seq, depth, cutoff)
    };

    let results: Vec<split::DecomposeResult> = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        pool.install(|| records.par_iter().map(decompose_one).collect())
    } else {
        records.iter().map(decompose_one).collect()
    };

    // writer
    let mut out_box: Box<dyn std::io::Write> = if let Some(p) = out_path {
        Box::new(std::io::BufWriter::new(std::fs::File::create(p)?))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };
    for (rec, res) in records.iter().zip(&results) {
        io::emit::write_record(&mut out_box, &rec.header, res)?;
    }
    out_box.flush()?;

    if let Some(path) = db_path {
        let mut db = io::db::MonomerDb::default();
        for (rec, res) in records.iter().zip(&results) {
            db.push(io::db::DbRecord::from_result(&rec.header, res));
        }
        db.set_meta(io::db::DbMeta {
            input_file: Some(input.to_string()),
            build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
            build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
        });
        db.save_to_file(path)
            .map_err(|e| anyhow::anyhow!("cannot write monomer DB to '{}': {}", path, e))?;
        println!("monomer DB saved: {}", path);
    }

    Ok(())
}

fn run_stats(db_path: &str, top: usize) -> Result<()> {
    let db = io::db::MonomerDb::load_from_file(db_path)
        .map_err(|e| anyhow::anyhow!("cannot load monomer DB '{}': {}", db_path, e))?;

    if let Some(input) = &db.meta.input_file {
        println!("input: {}", input);
    }
    if let Some(ts) = &db.meta.build_timestamp {
        println!("built: {}", ts);
    }
    println!("records: {}", db.records.len());

    for rec in &db.records {
        println!(
            "{}\tperiod={}\tscore={:.3}\tfragments={}",
            rec.header, rec.period, rec.score, rec.n_fragments
        );
    }

    let top_monomers = db.top_monomers(top);
    if !top_monomers.is_empty() {
        println!("top monomers:");
        for (seq, count) in top_monomers {
            println!("  {} x{}", seq, count);
        }
    }
    Ok(())
}
