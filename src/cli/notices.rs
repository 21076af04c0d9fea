//! Informational, warranty and conditions notices.

const VERSION: &str = env!("CAESAR_VERSION");
const YEAR: &str = "2025";
const LICENSE: &str = "GPLv3";

fn block(lines: &[&str]) -> String {
    let mut output = String::new();
    for line in lines {
        if line.is_empty() {
            output.push_str("[+] \n");
        } else {
            output.push_str(&format!("[+] {}\n", line));
        }
    }
    output
}

/// Program banner shown by `-i` and at the start of an interactive session
pub fn information() -> String {
    let mut output = format!(
        "[+] Caesar, version {} Copyright (C) {} the caesar authors.\n",
        VERSION, YEAR
    );
    output.push_str(&block(&[
        "",
        "This program is free software: you can redistribute it and/or modify",
        "it under the terms of the GNU General Public License as published by",
        &format!("the Free Software Foundation, {}.", LICENSE),
        "",
        "This program comes with ABSOLUTELY NO WARRANTY; for details type 'caesar -w'.",
        "This is free software, and you are welcome to redistribute it under certain",
        "conditions; type 'caesar -c' for details.",
        "",
        "For help on how to use the program type 'caesar -h'.",
        "",
    ]));
    output
}

pub fn warranty() -> String {
    block(&[
        &format!("Copyright (C) {} the caesar authors.", YEAR),
        "",
        "This program is distributed in the hope that it will be useful,",
        "but WITHOUT ANY WARRANTY; without even the implied warranty of",
        "MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.",
        "",
        "THE ENTIRE RISK AS TO THE QUALITY AND PERFORMANCE OF THE PROGRAM",
        "IS WITH YOU. SHOULD THE PROGRAM PROVE DEFECTIVE, YOU ASSUME THE",
        "COST OF ALL NECESSARY SERVICING, REPAIR OR CORRECTION.",
        "",
        "See the GNU General Public License for more details.",
        "",
        "You should have received a copy of the GNU General Public License",
        "along with this program. If not, see <https://www.gnu.org/licenses/>.",
        "",
    ])
}

pub fn conditions() -> String {
    block(&[
        &format!("Copyright (C) {} the caesar authors.", YEAR),
        "",
        "This program is free software: you can redistribute it and/or modify",
        "it under the terms of the GNU General Public License as published by",
        &format!("the Free Software Foundation, {}.", LICENSE),
        "",
        "The GPL gives you four freedoms:",
        "1st: to use the software for any purpose.",
        "2nd: to study how the software works and adapt it to your needs.",
        "3rd: to distribute copies of the software.",
        "4th: to improve the software and share those improvements.",
        "",
        "Any program derived from it must be distributed under the same license,",
        "together with its source code. Commercial distribution is allowed",
        "as long as the source code is distributed.",
        "",
        "You should have received a copy of the GNU General Public License",
        "along with this program. If not, see <https://www.gnu.org/licenses/>.",
        "",
    ])
}
