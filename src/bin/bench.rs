//! SynHash benchmark harness
//! Compares SynHash against SHA-256 with reproducible inputs

use anyhow::{Context, Result};
use clap::Parser;
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "SynHash throughput benchmark")]
struct BenchConfig {
    /// Hash this file instead of generated data
    #[arg(long)]
    file: Option<PathBuf>,
    /// Generated input size in bytes
    #[arg(long, default_value_t = 16_000_000)]
    size: usize,
    /// Chunk size for streaming SHA-256 and batched SynHash
    #[arg(long, default_value_t = 65536)]
    chunk: usize,
    /// Worker threads for the batched run
    #[arg(long, default_value_t = 8)]
    threads: usize,
    /// Runs per algorithm; the median is reported
    #[arg(long, default_value_t = 3)]
    repeat: usize,
    /// CSV file results are appended to
    #[arg(long, default_value = "bench_results.csv")]
    csv: PathBuf,
}

struct BenchResult {
    algorithm: String,
    threads: usize,
    chunk: usize,
    size: usize,
    mb_per_sec: f64,
    digest_hex: String,
}

fn load_or_generate_data(config: &BenchConfig) -> Result<Vec<u8>> {
    if let Some(path) = &config.file {
        info!(path = %path.display(), "loading input file");
        let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data).context("read input file")?;
        info!(bytes = data.len(), "loaded");
        Ok(data)
    } else {
        info!(bytes = config.size, "generating pseudo-random input");
        // LCG fill, not meant to be random in any strong sense
        let mut data = vec![0u8; config.size];
        let mut rng_state = 0x123456789abcdef0u64;
        for chunk in data.chunks_mut(8) {
            rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let bytes = rng_state.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(data)
    }
}

fn mb_per_sec(len: usize, elapsed: f64) -> f64 {
    (len as f64 / 1_000_000.0) / elapsed
}

fn bench_sha256_streaming(data: &[u8], chunk_size: usize) -> (f64, String) {
    let start = Instant::now();
    let mut hasher = Sha256::new();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }
    let result = hasher.finalize();
    let elapsed = start.elapsed().as_secs_f64();

    (mb_per_sec(data.len(), elapsed), hex::encode(&result[..8]))
}

fn bench_synhash_single(data: &[u8]) -> (f64, String) {
    let start = Instant::now();
    let result = synhash::digest(data);
    let elapsed = start.elapsed().as_secs_f64();

    (mb_per_sec(data.len(), elapsed), hex::encode(&result.to_bytes()[..8]))
}

/// Hash fixed-size chunks as independent messages, then fingerprint the
/// concatenated chunk digests.
fn bench_synhash_batched(pool: &rayon::ThreadPool, data: &[u8], chunk_size: usize) -> (f64, String) {
    let start = Instant::now();
    let chunks: Vec<&[u8]> = data.chunks(chunk_size).collect();
    let digests = pool.install(|| synhash::digest_many(&chunks));

    let mut hasher = synhash::SynHasher::new();
    for d in &digests {
        hasher.update(&d.to_bytes());
    }
    let result = hasher.finalize();
    let elapsed = start.elapsed().as_secs_f64();

    (mb_per_sec(data.len(), elapsed), hex::encode(&result.to_bytes()[..8]))
}

fn median(mut speeds: Vec<f64>) -> f64 {
    speeds.sort_by(|a, b| a.total_cmp(b));
    speeds[speeds.len() / 2]
}

fn run_series(
    label: &str,
    threads: usize,
    config: &BenchConfig,
    data: &[u8],
    results: &mut Vec<BenchResult>,
    mut run: impl FnMut() -> (f64, String),
) -> Result<f64> {
    println!("📊 Running {label}...");
    let mut speeds = Vec::with_capacity(config.repeat);
    for i in 0..config.repeat {
        print!("   Run {}/{}: ", i + 1, config.repeat);
        std::io::stdout().flush()?;
        let (speed, digest) = run();
        speeds.push(speed);
        println!("{:.2} MB/s (digest: {}...)", speed, digest);
        if i == 0 {
            results.push(BenchResult {
                algorithm: label.to_string(),
                threads,
                chunk: config.chunk,
                size: data.len(),
                mb_per_sec: speed,
                digest_hex: digest,
            });
        }
    }
    let med = median(speeds);
    println!("   Median: {:.2} MB/s\n", med);
    Ok(med)
}

fn run_benchmark(config: &BenchConfig, data: &[u8]) -> Result<Vec<BenchResult>> {
    let mut results = Vec::new();

    info!(
        size = data.len(),
        chunk = config.chunk,
        threads = config.threads,
        repeat = config.repeat,
        "benchmark configuration"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .context("build rayon pool")?;

    // Warm-up
    let _ = bench_sha256_streaming(data, config.chunk);
    let _ = bench_synhash_single(data);

    let sha = run_series("SHA-256", 1, config, data, &mut results, || {
        bench_sha256_streaming(data, config.chunk)
    })?;
    let single = run_series("SynHash", 1, config, data, &mut results, || {
        bench_synhash_single(data)
    })?;
    let batched = run_series("SynHash-MT", config.threads, config, data, &mut results, || {
        bench_synhash_batched(&pool, data, config.chunk)
    })?;

    info!(
        single_vs_sha = single / sha,
        batched_vs_sha = batched / sha,
        "speedup over SHA-256"
    );
    Ok(results)
}

fn print_results_table(results: &[BenchResult]) {
    println!("\n╔═════════════════════════════════════════════════════════════════════════╗");
    println!("║                            BENCHMARK RESULTS                            ║");
    println!("╠═════════════════════════════════════════════════════════════════════════╣");
    println!("║ Algorithm   │ Threads │  Chunk  │    MB/s │ Speedup │ Digest            ║");
    println!("╠═════════════════════════════════════════════════════════════════════════╣");

    let baseline = results.first().map_or(1.0, |r| r.mb_per_sec);
    for result in results {
        println!(
            "║ {:11} │ {:7} │ {:7} │ {:7.2} │ {:6.2}x │ {:17} ║",
            result.algorithm,
            result.threads,
            format!("{}K", result.chunk / 1024),
            result.mb_per_sec,
            result.mb_per_sec / baseline,
            result.digest_hex
        );
    }

    println!("╚═════════════════════════════════════════════════════════════════════════╝\n");
}

fn append_to_csv(path: &Path, results: &[BenchResult]) -> Result<()> {
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    let file_exists = path.exists();
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;

    if !file_exists {
        writeln!(file, "algorithm,threads,chunk,size,mb_s,timestamp")?;
    }

    for result in results {
        writeln!(
            file,
            "{},{},{},{},{:.2},{}",
            result.algorithm, result.threads, result.chunk, result.size, result.mb_per_sec, timestamp
        )?;
    }

    info!(path = %path.display(), rows = results.len(), "results appended");
    Ok(())
}

fn main() -> Result<()> {
    let config = BenchConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    anyhow::ensure!(config.chunk > 0, "--chunk must be non-zero");
    anyhow::ensure!(config.repeat > 0, "--repeat must be non-zero");

    println!("\n⚠️  SynHash is NOT cryptographically secure - fingerprinting only\n");

    let data = load_or_generate_data(&config)?;
    let results = run_benchmark(&config, &data)?;

    print_results_table(&results);
    append_to_csv(&config.csv, &results)?;
    Ok(())
}
