//! Benchmarks for directive interpretation and dispatch
//!
//! Run with: cargo bench interpret

use vimrc_loader::directive::interpret;
use vimrc_loader::keymap::{apply_requests, Keymap};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// A directive file with a mix of comments, binds, unbinds and bad lines
fn make_vimrc(line_count: usize) -> String {
    let mut text = String::with_capacity(line_count * 24);
    for i in 0..line_count {
        let line = match i % 6 {
            0 => "\" section comment\n".to_string(),
            1 => format!("nmap <leader>{} :call<Space>F{}()<CR>\n", i, i),
            2 => format!("imap j{} <Esc>\n", i),
            3 => format!("map g{} ^\n", i),
            4 => format!("nunmap <leader>{}\n", i - 3),
            _ => "set number\n".to_string(),
        };
        text.push_str(&line);
    }
    text
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn interpret_text(bencher: divan::Bencher, line_count: usize) {
    let text = make_vimrc(line_count);
    bencher.bench(|| divan::black_box(interpret(divan::black_box(&text))));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn interpret_and_apply(bencher: divan::Bencher, line_count: usize) {
    let text = make_vimrc(line_count);
    bencher.bench(|| {
        let result = interpret(&text);
        let mut keymap = Keymap::new();
        apply_requests(&mut keymap, &result.requests);
        divan::black_box(keymap)
    });
}
