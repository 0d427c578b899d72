use crate::cli::{EnumerateArgs, OutputFormat};
use crate::error::Result;
use crate::utils::output;
use crate::utils::progress::CliProgressHandler;
use abgraft::core::io::table::slot_headers;
use abgraft::core::permutation::{
    Cardinalities, EnumerationLimits, PermutationError, PermutationSet, enumerate_many,
};
use abgraft::engine::progress::{Progress, ProgressReporter};
use std::io::Write;
use tracing::{info, instrument};

#[instrument(skip_all, name = "enumerate_command")]
pub fn run(args: EnumerateArgs) -> Result<()> {
    let limits = args
        .limit
        .map(EnumerationLimits::with_max_permutations)
        .unwrap_or_default();
    let inputs: Vec<Vec<i64>> = args.cardinalities.into_iter().map(|c| c.0).collect();
    let show_progress = args.output.is_some();
    let output_path = args.output.as_deref();

    // Inputs are validated before the output is opened; opening truncates an existing file.
    if args.count_only {
        let counts = count_all(&inputs)?;
        let mut writer = output::open(output_path)?;
        write_counts(&mut writer, &counts)?;
        writer.flush()?;
    } else if let [input] = inputs.as_slice() {
        let (cardinalities, total) = checked_total(input, &limits)?;
        let mut writer = output::open(output_path)?;
        stream_single(&mut writer, &cardinalities, total, args.format, show_progress)?;
        writer.flush()?;
    } else {
        let sets = enumerate_batch(&inputs, &limits)?;
        let mut writer = output::open(output_path)?;
        write_batch(&mut writer, &inputs, &sets, args.format)?;
        writer.flush()?;
    }
    Ok(())
}

fn count_all(inputs: &[Vec<i64>]) -> Result<Vec<(Cardinalities, usize)>> {
    inputs
        .iter()
        .map(|input| -> Result<(Cardinalities, usize)> {
            let cardinalities = Cardinalities::from_signed(input)?;
            let total = cardinalities
                .total_permutations()
                .ok_or(PermutationError::CountOverflow)?;
            Ok((cardinalities, total))
        })
        .collect()
}

fn checked_total(input: &[i64], limits: &EnumerationLimits) -> Result<(Cardinalities, usize)> {
    let cardinalities = Cardinalities::from_signed(input)?;
    let total = cardinalities
        .total_permutations()
        .ok_or(PermutationError::CountOverflow)?;
    if let Some(limit) = limits.max_permutations {
        if total > limit {
            return Err(PermutationError::LimitExceeded { total, limit }.into());
        }
    }
    Ok((cardinalities, total))
}

fn enumerate_batch(inputs: &[Vec<i64>], limits: &EnumerationLimits) -> Result<Vec<PermutationSet>> {
    info!(vectors = inputs.len(), "Enumerating a batch of cardinality vectors.");
    let sets = enumerate_many(inputs, limits)
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(sets)
}

fn write_counts(writer: &mut dyn Write, counts: &[(Cardinalities, usize)]) -> Result<()> {
    for (cardinalities, total) in counts {
        writeln!(writer, "{}\t{}", cardinalities, total)?;
    }
    Ok(())
}

// A single vector is streamed from the lazy iterator, so nothing is materialized.
fn stream_single(
    writer: &mut dyn Write,
    cardinalities: &Cardinalities,
    total: usize,
    format: OutputFormat,
    show_progress: bool,
) -> Result<()> {
    info!(%cardinalities, total, "Streaming permutations.");

    let reporter = if show_progress {
        ProgressReporter::with_callback(CliProgressHandler::new().get_callback())
    } else {
        ProgressReporter::new()
    };

    reporter.report(Progress::PhaseStart {
        name: "Writing Permutations",
    });
    let written = output::write_permutations(
        writer,
        format,
        &slot_headers(cardinalities.len()),
        reporter.track(total as u64, cardinalities.permutations()),
    )?;
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(written, "Finished writing permutations.");
    Ok(())
}

fn write_batch(
    writer: &mut dyn Write,
    inputs: &[Vec<i64>],
    sets: &[PermutationSet],
    format: OutputFormat,
) -> Result<()> {
    for (input, set) in inputs.iter().zip(sets) {
        writeln!(writer, "# cardinalities: {:?}", input)?;
        output::write_permutations(&mut *writer, format, &slot_headers(input.len()), set)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::error::CliError;
    use clap::Parser;
    use std::fs;
    use std::path::Path;

    fn streamed(input: &[i64], format: OutputFormat) -> Result<String> {
        let (cardinalities, total) = checked_total(input, &EnumerationLimits::unlimited())?;
        let mut buffer = Vec::new();
        stream_single(&mut buffer, &cardinalities, total, format, false)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    fn batch(inputs: &[Vec<i64>], limits: &EnumerationLimits) -> Result<String> {
        let sets = enumerate_batch(inputs, limits)?;
        let mut buffer = Vec::new();
        write_batch(&mut buffer, inputs, &sets, OutputFormat::Plain)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    fn enumerate_args(extra: &[&str], output: &Path) -> EnumerateArgs {
        let mut args = vec!["abgraft", "enumerate"];
        args.extend_from_slice(extra);
        args.extend_from_slice(&["-o", output.to_str().unwrap()]);
        match Cli::parse_from(args).command {
            Commands::Enumerate(args) => args,
            _ => panic!("Expected 'enumerate' subcommand"),
        }
    }

    #[test]
    fn single_vector_is_streamed_in_odometer_order() {
        let text = streamed(&[2, 0, 3], OutputFormat::Plain).unwrap();
        assert_eq!(
            text,
            "1 0 1\n1 0 2\n1 0 3\n2 0 1\n2 0 2\n2 0 3\n"
        );
    }

    #[test]
    fn csv_output_uses_slot_headers() {
        let text = streamed(&[1, 2], OutputFormat::Csv).unwrap();
        assert_eq!(text, "slot1,slot2\n1,1\n1,2\n");
    }

    #[test]
    fn limit_is_checked_against_the_total() {
        let result = checked_total(&[3, 3], &EnumerationLimits::with_max_permutations(8));
        assert!(matches!(
            result,
            Err(CliError::Permutation(PermutationError::LimitExceeded {
                total: 9,
                limit: 8
            }))
        ));
        assert!(checked_total(&[3, 3], &EnumerationLimits::with_max_permutations(9)).is_ok());
    }

    #[test]
    fn negative_cardinality_is_reported_with_its_slot() {
        let result = streamed(&[2, -4], OutputFormat::Plain);
        assert!(matches!(
            result,
            Err(CliError::Permutation(PermutationError::InvalidInput {
                slot: 1,
                value: -4
            }))
        ));
    }

    #[test]
    fn counts_are_listed_per_vector() {
        let counts = count_all(&[vec![2, 0, 3], vec![]]).unwrap();
        let mut buffer = Vec::new();
        write_counts(&mut buffer, &counts).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[2, 0, 3]\t6\n[]\t1\n");
    }

    #[test]
    fn batch_output_separates_vectors_with_comment_lines() {
        let text = batch(&[vec![1, 2], vec![0, 1]], &EnumerationLimits::unlimited()).unwrap();
        assert_eq!(
            text,
            "# cardinalities: [1, 2]\n1 1\n1 2\n# cardinalities: [0, 1]\n0 1\n"
        );
    }

    #[test]
    fn batch_with_a_failing_vector_fails_as_a_whole() {
        let result = batch(&[vec![1, 2], vec![-1]], &EnumerationLimits::unlimited());
        assert!(matches!(
            result,
            Err(CliError::Permutation(PermutationError::InvalidInput {
                slot: 0,
                value: -1
            }))
        ));

        let result = batch(&[vec![2], vec![5]], &EnumerationLimits::with_max_permutations(3));
        assert!(matches!(
            result,
            Err(CliError::Permutation(PermutationError::LimitExceeded { .. }))
        ));
    }

    #[test]
    fn rejected_input_leaves_existing_output_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("permutations.txt");

        for extra in [
            &["-c", "-1"][..],
            &["-c", "3,3", "--limit", "8"][..],
            &["-c", "1,2", "-c", "2,-5"][..],
            &["-c", "-2", "--count-only"][..],
        ] {
            fs::write(&path, "kept\n").unwrap();
            let result = run(enumerate_args(extra, &path));
            assert!(result.is_err(), "expected failure for {:?}", extra);
            assert_eq!(fs::read_to_string(&path).unwrap(), "kept\n");
        }
    }

    #[test]
    fn accepted_input_is_written_to_the_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("permutations.csv");

        run(enumerate_args(&["-c", "0,2", "-f", "csv"], &path)).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "slot1,slot2\n0,1\n0,2\n"
        );
    }
}
