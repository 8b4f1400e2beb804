//! Coordwire CLI
//!
//! Usage:
//!   coordwire [OPTIONS] encode <X> <Y>
//!   coordwire [OPTIONS] decode <QX> <QY>
//!   coordwire [OPTIONS] bench

use std::hint::black_box;
use std::time::Instant;

use coordwire::logging::{init_logging, LoggingConfig};
use coordwire::{CoordinateCodec, Domain, MessageReader, MessageWriter, Position, WIRE_SIZE};

/// CLI configuration
struct CliConfig {
    min: f32,
    max: f32,
    verbose: bool,
    command: Vec<String>,
    /// Argumen yang gagal di-parse; domain adalah wire contract,
    /// jadi tidak boleh diam-diam kembali ke default
    invalid: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            min: Domain::PLAY_AREA.min(),
            max: Domain::PLAY_AREA.max(),
            verbose: false,
            command: Vec::new(),
            invalid: None,
        }
    }
}

fn print_help() {
    println!("Coordwire - Bounded-Range 2D Coordinate Codec\n");
    println!("Usage: coordwire [OPTIONS] <COMMAND>\n");
    println!("Commands:");
    println!("  encode <X> <Y>     Quantize a position to (qx, qy) and wire bytes");
    println!("  decode <QX> <QY>   Recover the approximate position");
    println!("  bench              Run latency and round-trip error benchmarks (default)\n");
    println!("Options:");
    println!("      --min <F>      Domain minimum (default: -50)");
    println!("      --max <F>      Domain maximum (default: 50)");
    println!("  -v, --verbose      Verbose output");
    println!("  -h, --help         Show this help");
}

fn parse_bound(flag: &str, value: Option<&String>) -> Result<f32, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {}: {}", flag, value))
}

fn parse_args(args: &[String]) -> CliConfig {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--min" | "--max") => {
                match parse_bound(flag, args.get(i + 1)) {
                    Ok(v) if flag == "--min" => config.min = v,
                    Ok(v) => config.max = v,
                    Err(e) => {
                        config.invalid.get_or_insert(e);
                    }
                }
                i += 1;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => config.command.push(other.to_string()),
        }
        i += 1;
    }

    config
}

fn parse_pair<T: std::str::FromStr>(args: &[String]) -> Result<(T, T), String> {
    match args {
        [a, b] => {
            let a = a.parse().map_err(|_| format!("invalid value: {}", a))?;
            let b = b.parse().map_err(|_| format!("invalid value: {}", b))?;
            Ok((a, b))
        }
        _ => Err(format!("expected 2 values, got {}", args.len())),
    }
}

fn run(config: CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(e) = config.invalid {
        return Err(e.into());
    }
    let domain = Domain::new(config.min, config.max)?;
    let codec = CoordinateCodec::new(domain);
    log::debug!(
        "domain [{}, {}], step {}",
        domain.min(),
        domain.max(),
        domain.step()
    );

    match config.command.split_first() {
        Some((cmd, rest)) if cmd == "encode" => {
            let (x, y) = parse_pair::<f32>(rest)?;
            if !domain.contains(x) || !domain.contains(y) {
                log::warn!("({}, {}) lies outside the domain and will be clamped", x, y);
            }
            let (qx, qy) = codec.encode(x, y);
            let bytes = codec.to_bytes(Position::new(x, y));
            println!("qx={} qy={} bytes={:02x?}", qx, qy, bytes);
        }
        Some((cmd, rest)) if cmd == "decode" => {
            let (qx, qy) = parse_pair::<u16>(rest)?;
            let (x, y) = codec.decode(qx, qy);
            println!("x={} y={}", x, y);
        }
        Some((cmd, _)) if cmd == "bench" => run_benchmarks(&codec)?,
        None => run_benchmarks(&codec)?,
        Some((cmd, _)) => return Err(format!("unknown command: {}", cmd).into()),
    }

    Ok(())
}

fn run_benchmarks(codec: &CoordinateCodec) -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Coordwire Codec Benchmarks");
    println!("=============================\n");

    benchmark_encode_decode(codec);
    benchmark_stream(codec)?;
    report_round_trip_error(codec);

    println!("\n✅ All benchmarks complete!");
    Ok(())
}

/// Sample posisi deterministik di dalam domain
fn sample_positions(codec: &CoordinateCodec, count: usize) -> Vec<Position> {
    let domain = codec.domain();
    let mut rng = fastrand::Rng::with_seed(42);
    (0..count)
        .map(|_| {
            let x = domain.min() + rng.f32() * domain.span();
            let y = domain.min() + rng.f32() * domain.span();
            Position::new(x, y)
        })
        .collect()
}

fn benchmark_encode_decode(codec: &CoordinateCodec) {
    println!("📊 Encode/Decode Benchmark (pure)");
    println!("---------------------------------");

    const ITERATIONS: usize = 1_000_000;
    let samples = sample_positions(codec, 4096);

    let start = Instant::now();
    for i in 0..ITERATIONS {
        let pos = samples[i & 4095];
        black_box(codec.encode(black_box(pos.x), black_box(pos.y)));
    }
    let encode_duration = start.elapsed();

    let start = Instant::now();
    for i in 0..ITERATIONS {
        let q = i as u16;
        black_box(codec.decode(black_box(q), black_box(q.wrapping_mul(31))));
    }
    let decode_duration = start.elapsed();

    let encode_ns = encode_duration.as_nanos() as f64 / ITERATIONS as f64;
    let decode_ns = decode_duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Operations: {}", ITERATIONS);
    println!("  Encode latency: {:.2} ns/op", encode_ns);
    println!("  Decode latency: {:.2} ns/op", decode_ns);
    println!(
        "  Encode throughput: {:.2} M pos/sec\n",
        ITERATIONS as f64 / encode_duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_stream(codec: &CoordinateCodec) -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Batch Stream Benchmark (64 positions/batch)");
    println!("----------------------------------------------");

    const BATCHES: usize = 100_000;
    const BATCH_LEN: usize = 64;
    let positions = sample_positions(codec, BATCH_LEN);
    let mut buffer = vec![0u8; 2 + BATCH_LEN * WIRE_SIZE];

    let start = Instant::now();
    for _ in 0..BATCHES {
        let mut writer = MessageWriter::new(&mut buffer);
        codec.write_batch(black_box(&positions), &mut writer)?;
    }
    let write_duration = start.elapsed();

    let start = Instant::now();
    for _ in 0..BATCHES {
        let mut reader = MessageReader::new(&buffer);
        for pos in codec.read_batch(&mut reader)? {
            black_box(pos);
        }
    }
    let read_duration = start.elapsed();

    let total = (BATCHES * BATCH_LEN) as f64;
    println!("  Batch size: {} bytes", buffer.len());
    println!(
        "  Write: {:.2} ns/pos ({:.2} M pos/sec)",
        write_duration.as_nanos() as f64 / total,
        total / write_duration.as_secs_f64() / 1_000_000.0
    );
    println!(
        "  Read:  {:.2} ns/pos ({:.2} M pos/sec)\n",
        read_duration.as_nanos() as f64 / total,
        total / read_duration.as_secs_f64() / 1_000_000.0
    );
    Ok(())
}

fn report_round_trip_error(codec: &CoordinateCodec) {
    println!("📊 Round-Trip Error");
    println!("-------------------");

    let samples = sample_positions(codec, 100_000);
    let mut max_err = 0.0f32;
    let mut sum_err = 0.0f64;

    for pos in &samples {
        let (qx, qy) = codec.encode(pos.x, pos.y);
        let (x, y) = codec.decode(qx, qy);
        let err = (pos.x - x).abs().max((pos.y - y).abs());
        max_err = max_err.max(err);
        sum_err += err as f64;
    }

    println!("  Samples: {}", samples.len());
    println!("  Quantization step: {:.6}", codec.domain().step());
    println!("  Max error:  {:.6}", max_err);
    println!("  Mean error: {:.6}", sum_err / samples.len() as f64);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config = parse_args(&args);

    init_logging(LoggingConfig::from_verbose(config.verbose));

    if let Err(e) = run(config) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
