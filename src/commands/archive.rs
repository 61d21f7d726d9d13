//! Plugin archive command implementations

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::utils::{
    add_table_row, create_spinner, create_table, format_bytes, format_compression_ratio,
    matches_pattern, truncate_path,
};

/// One archive member, read from the central directory.
struct MemberInfo {
    name: String,
    size: u64,
    compressed: u64,
}

/// Enumerate all members of the archive at `path` in stored order.
fn read_members(path: &str) -> Result<Vec<MemberInfo>> {
    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).context("failed to read archive")?;

    let mut members = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive
            .by_index_raw(index)
            .context("failed to read archive entry")?;
        members.push(MemberInfo {
            name: entry.name().to_string(),
            size: entry.size(),
            compressed: entry.compressed_size(),
        });
    }

    Ok(members)
}

pub fn list_archive(path: &str, long: bool, filter: Option<String>) -> Result<()> {
    if !Path::new(path).exists() {
        println!("Zip file not found");
        return Ok(());
    }

    let spinner = create_spinner("Opening archive...");
    let members = read_members(path);
    spinner.finish_and_clear();

    // Open and format errors are reported without aborting the run; this
    // command is a manual inspection aid.
    let members = match members {
        Ok(members) => members,
        Err(e) => {
            println!("Error: {e:#}");
            return Ok(());
        }
    };

    let pattern = filter.as_deref().unwrap_or("*");
    let matching: Vec<&MemberInfo> = members
        .iter()
        .filter(|m| matches_pattern(&m.name, pattern))
        .collect();

    if filter.is_some() && matching.is_empty() {
        println!("No members found matching pattern: {pattern}");
        return Ok(());
    }

    println!("Listing contents of {path}:");

    if long {
        let mut table = create_table(vec!["Member", "Size", "Compressed", "Ratio"]);
        for member in matching {
            add_table_row(
                &mut table,
                vec![
                    truncate_path(&member.name, 50),
                    format_bytes(member.size),
                    format_bytes(member.compressed),
                    format_compression_ratio(member.size, member.compressed),
                ],
            );
        }
        table.printstd();
    } else {
        for member in matching {
            println!("{}", member.name);
        }
    }

    Ok(())
}

pub fn probe_archive(path: &str, member: &str, suffix: &str) -> Result<()> {
    if !Path::new(path).exists() {
        println!("Error: {path} not found");
        return Ok(());
    }

    let spinner = create_spinner("Opening archive...");
    let members = read_members(path);
    spinner.finish_and_clear();
    let members = members?;

    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

    println!("Total entries: {}", names.len());
    for name in names.iter().take(20) {
        println!("Entry: {name}");
    }

    match find_member(&names, member) {
        MemberMatch::Exact => println!("FOUND: {member}"),
        MemberMatch::Backslashes(alt) => println!("FOUND (Backslashes): {alt}"),
        MemberMatch::Missing => {
            println!("MAIN PLUGIN FILE NOT FOUND IN ZIP!");
            println!("Members matching '{suffix}':");
            for name in names.iter().filter(|n| n.ends_with(suffix)) {
                println!("  {name}");
            }
        }
    }

    Ok(())
}

/// Outcome of looking up a member path in an archive's name list.
enum MemberMatch {
    Exact,
    Backslashes(String),
    Missing,
}

fn find_member(names: &[&str], target: &str) -> MemberMatch {
    if names.iter().any(|n| *n == target) {
        return MemberMatch::Exact;
    }

    // ZIP conventionally stores forward slashes, but some tools write
    // backslash-separated names; checked as a diagnostic aid only.
    let alt = target.replace('/', "\\");
    if names.iter().any(|n| *n == alt) {
        MemberMatch::Backslashes(alt)
    } else {
        MemberMatch::Missing
    }
}

pub fn pack_plugin(source: &str, output: &str) -> Result<()> {
    let source = Path::new(source);
    if !source.is_dir() {
        bail!("source directory {} does not exist", source.display());
    }

    // Member names are anchored one level above the source directory so the
    // archive extracts to a self-contained plugin folder. An empty parent
    // (bare relative source) anchors at the current directory.
    let base = source.parent().with_context(|| {
        format!(
            "source directory {} has no parent to anchor member names",
            source.display()
        )
    })?;

    let file =
        File::create(output).with_context(|| format!("failed to create {output}"))?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(source).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let arcname = arcname_for(entry.path(), base)?;
        println!("Adding {} as {}", entry.path().display(), arcname);

        writer
            .start_file(arcname.as_str(), options)
            .with_context(|| format!("failed to start member {arcname}"))?;
        let mut reader = File::open(entry.path())
            .with_context(|| format!("failed to open {}", entry.path().display()))?;
        io::copy(&mut reader, &mut writer)
            .with_context(|| format!("failed to write member {arcname}"))?;
    }

    writer.finish().context("failed to finalize archive")?;

    Ok(())
}

/// Member name for `path` inside the archive: its path relative to `base`,
/// joined with forward slashes regardless of host platform.
fn arcname_for(path: &Path, base: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(base)
        .with_context(|| format!("{} is not under {}", path.display(), base.display()))?;

    let segments: Vec<&str> = relative
        .components()
        .map(|component| {
            component.as_os_str().to_str().with_context(|| {
                format!("non UTF-8 path segment in {}", path.display())
            })
        })
        .collect::<Result<_>>()?;

    Ok(segments.join("/"))
}
