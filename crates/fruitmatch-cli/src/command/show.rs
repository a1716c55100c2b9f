use fruitmatch_engine::Board;

use super::BoardArg;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ShowArg {
    #[clap(flatten)]
    board: BoardArg,
}

pub(crate) fn run(arg: &ShowArg) -> anyhow::Result<()> {
    let ShowArg { board: board_arg } = arg;

    let config = board_arg.load_config()?;
    let seed = board_arg.seed();
    let size = board_arg.grid_size.unwrap_or(config.board.grid_size);

    let mut board = Board::with_seed(config.board, seed)?;
    let report = board.initialize_board(size);
    let Some(grid) = board.grid() else {
        anyhow::bail!("board was not dealt");
    };

    let fill = if report.converged {
        "no matches"
    } else {
        "matches left"
    };
    println!("seed: {seed}");
    println!(
        "size: {0}x{0}, {1} re-roll passes, {fill}",
        grid.size(),
        report.iterations
    );
    println!("{grid}");
    Ok(())
}
