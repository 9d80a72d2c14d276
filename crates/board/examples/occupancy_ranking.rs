//! Occupancy Ranking Demonstration
//!
//! Run with: cargo run -p occupancy-board --example occupancy_ranking
//!
//! This example walks through the pipeline one stage at a time:
//! - The dice table: sum probabilities and the share that is a double
//! - Card-driven moves on the board
//! - The 120-state transition matrix and its stationary distribution
//! - Rankings for six- and four-sided dice
//!
//! Key insight: the long-run occupancy is the null vector of T - I.

use occupancy_board::report::{format_report, modal_string};
use occupancy_board::{Board, BoardError, Dice, OccupancyModel, SquareKind, STATE_COUNT};

fn main() -> Result<(), BoardError> {
    println!("=== Long-Run Occupancy of a Monopoly-Style Board ===\n");

    // -------------------------------------------------------------------------
    // 1. Dice
    // -------------------------------------------------------------------------
    println!("1. Two Six-Sided Dice");
    println!("---------------------\n");

    let dice = Dice::new(6)?;
    println!("  sum   P(sum)   P(double | sum)");
    for outcome in dice.outcomes() {
        println!(
            "  {:>3}   {:.4}   {:.4}",
            outcome.total, outcome.probability, outcome.double_relative
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. Board
    // -------------------------------------------------------------------------
    println!("2. Card Squares");
    println!("---------------\n");

    let board = Board::standard()?;
    for index in 0..board.size() {
        match board.kind(index) {
            SquareKind::Chance => println!(
                "  {:<4} Chance          next railway {}, next utility {}, back three {}",
                board.label(index),
                board.label(board.next_railway(index)),
                board.label(board.next_utility(index)),
                board.label(board.back(index, 3)),
            ),
            SquareKind::CommunityChest => {
                println!("  {:<4} Community Chest", board.label(index))
            }
            SquareKind::GoToJail => println!("  {:<4} Go To Jail", board.label(index)),
            SquareKind::Plain => {}
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // 3. Transition Matrix and Stationary Distribution
    // -------------------------------------------------------------------------
    println!("3. Markov Chain");
    println!("---------------\n");

    let model = OccupancyModel::with_sides(6)?;
    let t = model.transition_matrix();
    let worst = (0..STATE_COUNT)
        .map(|column| (t.column_sum(column) - 1.0).abs())
        .fold(0.0, f64::max);
    println!("  {} composite states (square × doubles count)", STATE_COUNT);
    println!("  largest column-sum error: {:.2e}", worst);

    let stationary = model.stationary()?;
    println!("  stationary mass: {:.12}", stationary.total());
    println!(
        "  solver: {:?}, fallback: {}",
        model.config().solver,
        model.config().fallback
    );

    let board = model.board();
    let squares = model.square_probabilities()?;
    println!(
        "  P({}) with {}-sided dice: {:.4}",
        board.label(board.jail()),
        model.dice().sides(),
        squares.prob(board.jail())?
    );
    println!();

    // -------------------------------------------------------------------------
    // 4. Rankings
    // -------------------------------------------------------------------------
    for sides in [6, 4] {
        let model = OccupancyModel::with_sides(sides)?;
        let ranking = model.compute_probabilities()?;
        println!("4. Top squares with {}-sided dice", sides);
        println!("--------------------------------\n");
        print!("{}", format_report(&ranking, 5));
        println!("  modal string: {}\n", modal_string(&ranking, 3));
    }

    Ok(())
}
