//! # permitscan CLI
//!
//! Command-line interface for the permitscan library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use permitscan::PermitScanError;
use permitscan::cli::Args;
use permitscan::config::{ExtractPolicy, TokenizerConfig};
use permitscan::filter::DateFilter;
use permitscan::format::{OutputFormat, write_to_format};
use permitscan::pipeline::{PipelineConfig, run_pipeline_with_stats};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), PermitScanError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Determine output extension based on format
    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("🔎 permitscan v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);

    // Build pipeline configuration
    let mut policy = ExtractPolicy::new();
    if args.remarks {
        policy = policy.with_remarks(true);
        println!("📝 Remarks: included");
    }
    if args.default_sender {
        policy = policy.with_default_both_missing_to_sender(true);
        println!("👤 Default: sender");
    }

    let mut date_filter = DateFilter::new();
    if let Some(ref after) = args.after {
        date_filter = date_filter.with_cutoff(after)?;
        println!("📅 After:   {}", after);
    }

    let tokenizer = TokenizerConfig::new().with_skip_system_messages(!args.keep_system);

    let config = PipelineConfig::new()
        .with_tokenizer(tokenizer)
        .with_policy(policy)
        .with_date_filter(date_filter);

    println!();

    // Step 1: Parse and extract
    println!("⏳ Scanning WhatsApp export...");
    let scan_start = Instant::now();
    let content = fs::read_to_string(&args.input)?;
    let (records, stats) = run_pipeline_with_stats(&content, &config)?;
    let scan_time = scan_start.elapsed();
    println!(
        "   {} messages scanned, {} permit records found ({:.2}s)",
        stats.messages,
        records.len(),
        scan_time.as_secs_f64()
    );

    // Step 2: Write output in selected format
    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", lib_format);
    let write_start = Instant::now();
    write_to_format(&records, &output_path, lib_format)?;
    let write_time = write_start.elapsed();
    println!("   Written in {:.2}s", write_time.as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", stats.messages);
    println!("   Records:   {}", records.len());
    println!("   Hit rate:  {:.1}%", stats.hit_rate());

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = stats.messages as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: permitscan::cli::OutputFormat) -> String {
    if output != "permits.csv" {
        return output.to_string();
    }

    // Convert to library format for extension
    let lib_format: OutputFormat = format.into();
    format!("permits.{}", lib_format.extension())
}
