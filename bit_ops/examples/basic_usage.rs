use bit_ops::{BitField, FieldSpec, HostValue, RecordLayout};

fn main() {
    env_logger::init();

    println!("=== Bit Ops Examples ===\n");

    // Example 1: Flags in a hyperlink attribute word
    let _ = example_flags();

    // Example 2: Multi-bit fields
    example_fields();

    // Example 3: Values coming from a scripting host
    let _ = example_host_values();
}

fn example_flags() -> Result<(), bit_ops::BitOpsError> {
    println!("Example 1: Hyperlink attribute flags (32-bit word)");

    let layout = RecordLayout::new(&[
        FieldSpec::flag("hlstmfHasMoniker", 0),
        FieldSpec::flag("hlstmfIsAbsolute", 1),
        FieldSpec::flag("hlstmfSiteGaveDisplayName", 2),
        FieldSpec::flag("hlstmfHasLocationStr", 3),
        FieldSpec::flag("hlstmfHasDisplayName", 4),
        FieldSpec::flag("hlstmfHasGUID", 5),
        FieldSpec::flag("hlstmfHasCreationTime", 6),
        FieldSpec::flag("hlstmfHasFrameName", 7),
        FieldSpec::flag("hlstmfMonikerSavedAsStr", 8),
        FieldSpec::flag("hlstmfAbsFromGetdataRel", 9),
    ])?;

    let attrs = BitField::from_le_slice(&[0x17, 0x00, 0x00, 0x00])?;
    for (name, value) in layout.decode(&attrs) {
        println!("  {name}: {value:?}");
    }
    println!();

    Ok(())
}

fn example_fields() {
    println!("Example 2: Extracting packed fields");

    let word = BitField::new(0b1110111);
    println!("  word:        {:#b}", word.bits());
    println!("  bits 2..=4:  {:?}", word.value_at(2..=4));
    println!("  bit 2:       {:?}", word.value_at(2));
    println!("  bit -1:      {:?}", word.value_at(-1));
    println!("  reversed:    {:#b}", word.reverse());
    println!();
}

fn example_host_values() -> Result<(), bit_ops::BitOpsError> {
    println!("Example 3: Host selectors");

    let word = BitField::new(0b10110);
    println!("  set_at?(1)      = {:?}", word.set_at_host(&HostValue::Int(1))?);
    println!("  value_at(1..2)  = {:?}", word.value_at_host(&HostValue::inclusive(1, 2))?);
    println!("  value_at(2..1)  = {:?}", word.value_at_host(&HostValue::inclusive(2, 1))?);

    match word.value_at_host(&HostValue::Str("1..2".into())) {
        Ok(value) => println!("  unexpected value {value:?}"),
        Err(err) => println!("  rejected string selector: {err}"),
    }
    println!();

    Ok(())
}
