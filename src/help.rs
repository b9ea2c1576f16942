//! Usage screen shown on bare invocation.

pub fn show_usage() {
    println!("\nFlow - Terminal Animation");
    println!("=======================\n");
    println!("Usage:");
    println!("  termflow [color] [options]\n");
    println!("Colors:");
    println!("  white    - Flowing white/gray tones");
    println!("  matrix   - Classic Matrix green flow");
    println!("  cyan     - Default, smooth cyan flow");
    println!("  purple   - Flowing magenta/purple");
    println!("  blue     - Deep blue currents");
    println!("  red      - Flowing red patterns");
    println!("  yellow   - Warm yellow streams\n");
    println!("Options:");
    println!("  -b, --bright              Brighter color with denser pattern");
    println!("  -d, --dim                 Standard color with lighter pattern");
    println!("  --blend [color]           Blend with a second color");
    println!("  --blend-style [style]     Choose blend style:");
    println!("    chars   - Character-based blending (default)");
    println!("    bands   - Vertical flowing bands");
    println!("    waves   - Diagonal waves");
    println!("    value   - Density-based blending");
    println!("  --waves [1-3]             Add extra wave patterns");
    println!("  --speed [0.1-5]           Adjust animation speed (1 is default)\n");
    println!("Examples:");
    println!("  termflow              # Default cyan flow");
    println!("  termflow matrix -b    # Dense bright green Matrix-style");
    println!("  termflow cyan --blend blue                  # Character-based cyan/blue blend");
    println!("  termflow purple --blend yellow --blend-style waves   # Purple/yellow waves");
    println!("  termflow red --waves 2         # Red flow with two extra wave patterns");
    println!("  termflow blue --waves 3 -b     # Bright blue with maximum wave complexity");
    println!("  termflow cyan --speed 0.5      # Slower, relaxing flow");
    println!("  termflow matrix --speed 2      # Fast-paced Matrix effect\n");
    println!("Controls:");
    println!("  Ctrl+C    Exit the animation\n");
    println!("Starting in 2 seconds...");
}
