#![no_main]

use libfuzzer_sys::fuzz_target;
use shelfcat::{parse_line, parse_line_split, to_line};

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    // Whatever parses must serialize to a line that parses to the same book
    for parsed in [parse_line(line), parse_line_split(line)] {
        if let Ok(book) = parsed {
            let again = parse_line(&to_line(&book));
            if let Ok(again) = again {
                assert_eq!(again.isbn(), book.isbn());
                assert_eq!(again.year(), book.year());
            }
        }
    }
});
