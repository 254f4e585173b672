use colored::Colorize;
use thiserror::Error;

use crate::{
    Booster,
    BoostError,
    Classifier,
    Sample,
    WeakLearner,
};

use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,WeightedError,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log algorithm's behavor.
pub trait Research {
    /// The hypothesis at the current round.
    type Output;


    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;


    /// Returns the weighted error of the latest hypothesis,
    /// or `None` before the first round.
    fn weighted_error(&self) -> Option<f64>;
}


/// Errors reported by [`Logger::run`].
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Failed to write the log file.
    #[error("failed to write the log: {0}")]
    Io(#[from] io::Error),

    /// The boosting algorithm or the loss function failed.
    #[error(transparent)]
    Boost(#[from] BoostError),
}


/// Struct `Logger` provides a generic function that
/// logs the weighted error, train/test loss value, and running time
/// for each step of boosting.
///
/// # Example
/// ```no_run
/// use clusterboost::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let (train, test, locations): (Sample, Sample, Vec<Point>) = todo!();
/// let booster = ClusterBoost::init(&train, &locations, 5)?
///     .force_quit_at(300);
/// let weak_learner = booster.weak_learner();
///
/// let mut logger = Logger::new(
///         booster, weak_learner, zero_one_loss, &train, &test
///     )
///     .print_every(10)
///     .time_limit_as_secs(60);
///
/// // Each line of `log.csv` corresponds to a round.
/// let f = logger.run("log.csv")?;
/// # Ok(())
/// # }
/// ```
pub struct Logger<'a, B, W, G> {
    booster: B,
    weak_learner: W,
    loss_func: G,
    train: &'a Sample,
    test: &'a Sample,
    time_limit: u128,
    round: usize,
}


impl<'a, B, W, G> Logger<'a, B, W, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        booster: B,
        weak_learner: W,
        loss_func: G,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Returns the booster, e.g., to read its weights after the run.
    pub fn booster(&self) -> &B {
        &self.booster
    }
}


impl<H, B, W, G, O, S> Logger<'_, B, W, G>
    where B: Booster<H, Output = O> + Research<Output = S>,
          S: Classifier,
          W: WeakLearner<Hypothesis = H>,
          G: Fn(&Sample, &S) -> Result<f64, BoostError>,
{
    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000_u128);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `0` or `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = if round == 0 { usize::MAX } else { round };
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "WEIGHTED".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "ERROR".bold().blue(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            println!("{}", info_lines(info));
        }
        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<O, LoggerError>
    {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess();
        let verbose = self.round != usize::MAX;
        if verbose {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        // The latest status line, printed on termination.
        let mut last_line = None;

        // ---------------------------------------------------------------------
        // Boosting step
        for iter in 1.. {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter)?;

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            if flow.is_break() {
                if let (true, Some(line)) = (verbose, &last_line) {
                    println!("{} {line}\n", "[FIN]".bold().bright_green());
                }
                break;
            }

            let f = self.booster.current_hypothesis();
            let error = self.booster.weighted_error().unwrap_or(f64::NAN);
            let train = (self.loss_func)(self.train, &f)?;
            let test = (self.loss_func)(self.test, &f)?;

            // Write the results to `file`.
            let line = format!("{iter},{error},{train},{test},{time_acc}\n");
            file.write_all(line.as_bytes())?;

            let line = log_line(iter, error, train, test, time_acc);
            if time_acc > self.time_limit {
                if verbose {
                    println!("{} {line}\n", "[TLE]".bold().bright_red());
                }
                break;
            }

            if verbose && iter % self.round == 0 {
                println!("{} {line}", "[LOG]".bold().magenta());
            }
            last_line = Some(line);
        }

        let f = self.booster.postprocess();
        Ok(f)
    }
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


fn log_line(iter: usize, error: f64, train: f64, test: f64, time: u128)
    -> String
{
    format!(
        "{}\t\t{}\t{}\t{}\t{}",
        format!("{:>WIDTH$}", iter).red(),
        format!("{:>WIDTH$.PREC_WIDTH$}", error).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
        time_format(time).bold().cyan(),
    )
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
