use hamcheck_extract::OffsetForm;

const OFFSETS: &str = r#"
"Games"
{
	"valve"
	{
		"Offsets"
		{
			"spawn"
			{
				"windows"	"0"
				"linux"		"2"
				"mac"		"0x2"
			}
			"TakeDamage"
			{
				"windows"	"12"
				"linux"		"14"
				"beos"		"1"
			}
			"broken"
			{
				"windows"	"twelve"
			}
			"negative"
			{
				"linux"		"-1"
			}
		}
	}
}
"#;

#[test]
fn offset_blocks_collect_per_platform_values() {
    let table = OffsetForm::default().extract(OFFSETS).unwrap();
    let names: Vec<_> = table.iter().map(|r| r.raw_name.as_str()).collect();
    assert_eq!(names, ["spawn", "TakeDamage", "negative"]);

    let spawn = table.get(0).unwrap();
    assert_eq!(spawn.platform_values["windows"], 0);
    assert_eq!(spawn.platform_values["linux"], 2);
    assert_eq!(spawn.platform_values["mac"], 2);

    let take_damage = table.find_key("takedamage").unwrap();
    assert_eq!(take_damage.platform_values.len(), 2);
    assert!(!take_damage.platform_values.contains_key("beos"));

    assert_eq!(table.get(2).unwrap().platform_values["linux"], -1);
}

#[test]
fn repeated_block_merges_into_first_appearance() {
    let text = "\"spawn\"\n\"windows\" \"1\"\n\"other\"\n\"linux\" \"5\"\n\"Spawn\"\n\"linux\" \"3\"\n";
    let table = OffsetForm::default().extract(text).unwrap();
    assert_eq!(table.len(), 2);
    let spawn = table.get(0).unwrap();
    assert_eq!(spawn.raw_name, "spawn");
    assert_eq!(spawn.platform_values["windows"], 1);
    assert_eq!(spawn.platform_values["linux"], 3);
}
