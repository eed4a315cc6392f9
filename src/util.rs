use std::env;

/// Return the program name followed by its arguments, for recording in the
/// header of generated files. Arguments spanning lines are elided.
pub fn command_line() -> Vec<String> {
    let program = env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.file_name().map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "emoji-kit".to_string());
    let mut argv = vec![program];
    for arg in env::args_os().skip(1) {
        let x = arg.to_string_lossy();
        if x.contains('\n') {
            argv.push("[snip (arg too long)]".to_string());
        } else {
            argv.push(x.into_owned());
        }
    }
    argv
}

/// Convert an ascending sequence of codepoints into a sorted sequence of
/// inclusive, non-overlapping ranges. Adjacent codepoints are merged.
pub fn to_ranges<I: IntoIterator<Item = u32>>(it: I) -> Vec<(u32, u32)> {
    let mut ranges: Vec<(u32, u32)> = vec![];
    for cp in it {
        if let Some(last) = ranges.last_mut() {
            if last.1 == cp || last.1 + 1 == cp {
                last.1 = cp;
                continue;
            }
        }
        ranges.push((cp, cp));
    }
    ranges
}

/// Split a comma separated list of property names, dropping empty entries.
pub fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}
