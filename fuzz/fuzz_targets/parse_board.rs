#![no_main]
use libfuzzer_sys::fuzz_target;
use piecemoves::chess::board::Board;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(board) = Board::try_from(input) {
        // Printing the board back gives a canonical placement.
        let printed = board.to_string();
        assert_eq!(Board::from_placement(&printed).unwrap(), board);
        assert_eq!(Board::from_placement(&printed).unwrap().to_string(), printed);
    }
});
