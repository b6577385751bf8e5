use crate::core::mode::AssistantMode;

/// Human-readable listing of every mode and the instructions it sends.
pub fn mode_listing() -> String {
    let mut out = String::new();
    for mode in AssistantMode::ALL {
        out.push_str(&format!("  • {} ({})\n", mode.label(), mode.slug()));
        match mode.system_prompt() {
            Some(prompt) => out.push_str(&format!("    {prompt}\n")),
            None => out.push_str("    (no system prompt; messages are sent as written)\n"),
        }
    }
    out
}

pub fn list_modes() {
    println!("🎓 Assistant modes");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    print!("{}", mode_listing());
    println!();
    println!("Start in a mode with: workbench --mode <slug>");
}
