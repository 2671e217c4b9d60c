//! The `show` command - fill the sample array and print it.

use contig::bracketed;

use crate::cli::{Order, ShowArgs};
use crate::common::{CliResult, sample};

/// Run the show command.
pub fn run(args: ShowArgs) -> CliResult<()> {
    println!("{}", render(args)?);
    Ok(())
}

/// Render the sample array in the requested order.
pub fn render(args: ShowArgs) -> CliResult<String> {
    let array = sample::filled(args.fill)?;
    tracing::debug!(order = ?args.order, "rendering sample array");
    Ok(match args.order {
        Order::Forward => bracketed(array.iter()),
        Order::Reverse => bracketed(array.iter().rev()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FillArgs;

    fn show(order: Order, start: i64, step: i64) -> String {
        render(ShowArgs {
            order,
            fill: FillArgs { start, step },
        })
        .unwrap()
    }

    #[test]
    fn reverse_by_default_values() {
        assert_eq!(
            show(Order::Reverse, 0, 1),
            "[ 19 18 17 16 15 14 13 12 11 10 9 8 7 6 5 4 3 2 1 0  ]"
        );
    }

    #[test]
    fn forward_with_step() {
        assert_eq!(
            show(Order::Forward, 100, 10),
            "[ 100 110 120 130 140 150 160 170 180 190 200 210 220 230 240 250 260 270 280 290  ]"
        );
    }
}
