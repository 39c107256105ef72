//! Species alias tables.
//!
//! Declaration order in [`SPECIES_ALIASES`] is load-bearing: resolution scans
//! it front to back and the first needle found in the value wins. Repeated
//! needles further down are unreachable but are kept where they were
//! declared so the table can be diffed against the curated source list.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Layer 1: `(needle, label)` pairs matched as case-insensitive substrings
pub const SPECIES_ALIASES: &[(&str, &str)] = &[
    ("white", "White Shark"),
    ("tiger", "Tiger Shark"),
    ("bull", "Bull Shark"),
    ("nurse", "Nurse Shark"),
    ("blacktip", "Blacktip Shark"),
    ("hammerhead", "Hammerhead Shark"),
    ("lemon", "Lemon Shark"),
    ("blue", "Blue Shark"),
    ("brown", "Brown Shark"),
    ("raggedtooth", "Raggedtooth Shark"),
    ("bronze", "Bronze Shark"),
    ("caribbean", "Caribbean Reef Shark"),
    ("mako", "Mako Shark"),
    ("reportedly a great white", "White Shark"),
    ("shall shark", "Shall Shark"),
    ("sandbar", "Sandbar Shark"),
    ("carribean", "Carribean Reef Shark"),
    ("raggedtooth", "Raggedtooth Shark"),
    ("broze", "Bronze Shark"),
    ("sevengill", "Sevengill Shark"),
    ("whitetip", "White Shark"),
    ("nurse", "Nurse Shark"),
    ("galapagos", "Galapagos Shark"),
    ("cookiecutter", "Cookiecutter Shark"),
    ("wfite", "White Shark"),
    ("wobbegong", "Wobbegong Shark"),
    ("horn", "Horn Shark"),
    ("mako", "Mako Shark"),
    (r#""A small shark"#, "Small Shark"),
    ("epaulette", "Epaulette Shark"),
    ("spinner", "Spinner Shark"),
    ("galapagos", "Galapagos Shark"),
    ("tope", "Tope Shark"),
    (r#""Reef shark""#, "Reef Shark"),
    (r#""whitetip shark""#, "White Shark"),
    ("broadnose", "Broadnise Shark"),
    ("reef", "Reef Shark"),
    ("sandtiger", "Tiger Shark"),
    ("spinner", "Spinner Shark"),
    ("stingray", "Stringray Shark"),
    ("toadfish", "Toadfish Shark"),
    (r#""reef shark""#, "Reef Shark"),
    ("blue", "Blue Shark"),
    ("salmon", "Salmon Shark"),
    ("wobbegong", "Wobbegong Shark"),
    ("porbeagle", "Porbeagle Shark"),
    ("seven-gill", "Gill Shark"),
    ("dogfish", "Dogfish Shark"),
    ("silky", "Silky Shark"),
    ("hammerhead", "Hammerhead Shark"),
    ("raggedtooth", "Raggedtooth Shark"),
    ("goblin", "Goblin Shark"),
    ("angel", "Angel Shark"),
    ("zambesi", "Zambesi Shark"),
    ("spurdog", "Spurdog Shark"),
    ("smoothhound", "Smoothhound Shark"),
    ("basking", "Basking Shark"),
    ("sand", "Sand Shark"),
    ("silvertip", "Silvertip Shark"),
    ("on 8/13/2005 anglers from New Zealand", "Small Shark"),
    ("copper", "Copper Shark"),
    ("dusky", "Dusky Shark"),
    ("grey-colored shark", "Grey Shark"),
    ("cow", "Cow Shark"),
    ("small", "Small Shark"),
    ("juvenile", "Small Shark"),
    ("authentificated", "unconfirmed"),
    ("whale", "Whale Shark"),
    ("unknown", "unconfirmed"),
    (r#""red shark""#, "Red Shark"),
    ("zambesi", "Zambezi Shark"),
    ("unconfirmed", "unconfirmed"),
    ("carpet", "Carpet Shark"),
    (r#""spear-eye""#, "Spear-eye Shark"),
    ("whale", "Whale Shark"),
    ("anglers from New Zealand", "Large Shark"),
    (r#""black finned shark""#, "Finned Shark"),
    ("soupfin", "Soupfin Shark"),
    ("leopard", "Leopard Shark"),
    ("grey", "Grey Shark"),
    ("gaffed", "Gaffed Shark"),
    ("shovelnose", "Shovelnose Shark"),
    (r#""ground shark""#, "Ground Shark"),
    (">", "Large Shark"),
    ("zambezi", "Zambezi Shark"),
    ("albimarginatus", "Albimarginatus Shark"),
    ("<", "Small Shark"),
    ("500", "Large Shark"),
    ("136", "Large Shark"),
    ("193", "Large Shark"),
    (r#""yellow belly""#, "Large Shark"),
    ("rhizoprionodon", "Gummy Shark"),
    (r#""banjo shark""#, "Banjo Shark"),
    ("not a shark", "not a shark"),
    ("shark captured", "Large Shark"),
    ("sharks", "Large Shark"),
    (r#""a very flat head”"#, "Large Shark"),
    (r#""gummy”"#, "Gummy Shark"),
    ("2 m", "Large Shark"),
    ("larger", "Large Shark"),
    ("hull", "Hull Shark"),
    ("4.5  m", "Large Shark"),
    ("bite", "not a shark"),
    ("cocktail", "Cocktail Shark"),
    ("carcharhinid", "Carcharhinid Shark"),
    ("macrurus", "C. Macrurus Shark"),
    ("“spear-eye”", "Spear-Eye Shark"),
    ("bonita sharkk", "Bonita Shark"),
    ("anglers", "Anglers Shark"),
    ("tooth fragments", "Large Shark"),
    ("to involve a pinniped instead", "not a shark"),
    ("on turtle scraps", "Small Shark"),
    ("another shark nearby", "Large Shark"),
    ("dolphin", "not a shark"),
    ("shark known as", "Old Tom Shark"),
    ("13", "Large Shark"),
    ("7' to 8'", "Large Shark"),
    ("invovlement", "not a shark"),
    ("not confirmes", "Small Shark"),
    ("3.3 m [10'", "Large Shark"),
    ("60 cm", "Small Shark"),
    ("1.3 m [4'", "Small Shark"),
    ("1.8 m [6']", "Large Shark"),
];

/// Layer 2: exact raw phrases (size and descriptor notes) mapped to a bucket.
/// When a phrase is declared twice the later entry is the one that applies.
pub const SPECIES_PHRASES: &[(&str, &str)] = &[
    (r#""small sharks""#, "Small Shark"),
    (r#""a small shark""#, "Small Shark"),
    ("Large shark", "Large Shark"),
    ("2.5m shark", "Large Shark"),
    ("3' to 4' shark", "Small Shark"),
    ("8' shark", "Large Shark"),
    ("4' shark", "Small Shark"),
    ("3' shark", "Small Shark"),
    ("1m shark", "Small Shark"),
    ("5m to 6m shark", "Large Shark"),
    ("5'shark", "Large Shark"),
    ("3m shark", "Large Shark"),
    ("6' shark", "Large Shark"),
    ("9' shark", "Large Shark"),
    ("5' shark", "Large Shark"),
    ("2' to 3' shark", "Small Shark"),
    ("7' to 8' shark", "Large Shark"),
    ("8 ft shark", "Large Shark"),
    ("5.5 ft shark", "Large Shark"),
    ("1.3m shark", "Small Shark"),
    ("3' to 5' shark", "Small Shark"),
    (r#"8" shark"#, "Large Shark"),
    ("4m shark", "Large Shark"),
    ("4' to 5' shark", "Small Shark"),
    ("2 m shark", "Large Shark"),
    ("5' to 6' shark", "Large Shark"),
    ("7' shark", "Large Shark"),
    ("1+ m shark", "Small Shark"),
    ("6' to 7' shark", "Large Shark"),
    ("2' shark", "Small Shark"),
    ("6.5' shark", "Large Shark"),
    ("10' to 12' shark", "Large Shark"),
    ("shark pup", "White Shark"),
    ("12' shark", "Large Shark"),
    ("2.5 m shark", "Large Shark"),
    ("Reported as shark attacks but injuries caused by toadfish", "not a shark"),
    ("Reported as shark bite but injury caused by stingray", "not a shark"),
    ("5' to 8' shark", "Large Shark"),
    ("3 m shark", "Large Shark"),
    ("2m shark", "Large Shark"),
    ("small shark", "Small Shark"),
    ("3m shark, probably a smooth hound", "Large Shark"),
    ("Shark involvement highly doubtful", "Small Shark"),
    ("No shark invovlement - it ws a publicity stunt", "not a shark"),
    ("Shark involvement prior to death not confirmed", "Small Shark"),
    ("10' shark", "Large Shark"),
    ("a small shark", "Small Shark"),
    ("3+ m shark", "Large Shark"),
    ("4' shark?", "Small Shark"),
    ("1m to 1.2 m shark", "Small Shark"),
    ("3- to 4-foot shark", "Small Shark"),
    ("3.5 to 4 m shark", "Large Shark"),
    ("2 m to  3 m shark", "Large Shark"),
    ("1.8 m shark", "Large Shark"),
    ("5 m shark", "Large Shark"),
    ("1.5 m shark", "Small Shark"),
    ("1 m shark", "Small Shark"),
    ("8' to 10' shark", "Large Shark"),
    ("4' to 6' shark", "Small Shark"),
    ("4' tp 5' shark", "Small Shark"),
    ("1.8 metre shark", "Large Shark"),
    ("6' to 8' shark", "Large Shark"),
    ("shark involvement not confirmed", "Small Shark"),
    (r#""small sharks""#, "Small Shark"),
    ("no shark involvement", "not a shark"),
    ("no shark invovlement", "not a shark"),
    ("No shark involvement", "not a shark"),
    ("1NAm NA] shark", "Large Shark"),
    ("4' toNA shark", "Small Shark"),
    ("4' shark", "Small Shark"),
    ("6' shark", "Large Shark"),
    ("4' toNA shark", "Small Shark"),
    ("2NAm NA] shark", "Large Shark"),
    ("3' shark", "Small Shark"),
    ("5' shark", "Small Shark"),
    ("3' toNA shark", "Small Shark"),
    ("2 m shark", "Large Shark"),
    ("3 m NA'] shark", "Large Shark"),
    ("3 m shark", "Large Shark"),
    ("1NAm toNA5 m NA toNA] shark", "Large Shark"),
    ("3NAm NA'] shark", "Large Shark"),
    ("7' shark", "Large Shark"),
    ("8' shark", "Large Shark"),
    ("5' toNA shark", "Large Shark"),
    ("2NAm shark", "Small Shark"),
    ("2' toNA shark", "Small Shark"),
    ("a small shark", "Small Shark"),
    ("Shark involvement prior to death not confirmed", "Small Shark"),
    ("1 m shark", "Small Shark"),
    ("Shark involvement not confirmed", "Small Shark"),
    ("Shark involvement prior to death unconfirmed", "Small Shark"),
    ("NA shark", "Small Shark"),
    ("3.5' to 4' shark", "Small Shark"),
    ("14' to 18'shark", "Large Shark"),
    ("15' shark", "Large Shark"),
    ("2 to 2.5 m shark", "Large Shark"),
    ("1' to 2' shark", "Small Shark"),
    ("20 to 30kg shark", "Small Shark"),
    ("14' shark", "Large Shark"),
    ("2 m to 3 m shark", "Large Shark"),
    ("80 kg shark", "Large Shark"),
    ("2.6 m shark", "Large Shark"),
    ("+3' shark", "Small Shark"),
    ("2' to 3' juvenile shark", "Small Shark"),
    ("3'  shark", "Small Shark"),
    ("2'  shark", "Small Shark"),
    ("4.5 to 5' shark", "Small Shark"),
    ("1.5' to 2' shark", "Small Shark"),
    ("2.5' shark", "Small Shark"),
    (r#""a small shark""#, "Small Shark"),
    ("Not a shark attack; it was a hoax", "not a shark"),
    (r#""A small shark""#, "Small Shark"),
    ("Authorities report injury caused bya barracuda", "not a shark"),
    ("No shark invovlement", "not a shark"),
    ("A small shark", "Small Shark"),
    ("7' to 8' shark", "Large Shark"),
    ("Injuries not caused by a shark", "not a shark"),
    ("Shark involvement unconfirmed but considered probable", "Small Shark"),
    (r#"Shovelnose "shark" which is a ray, not a shark)"#, "not a shark"),
    ("Juvenile shark", "Small Shark"),
    ("Injury most likely caused by barracuda, not a shark", "not a shark"),
    ("Shark involvement questionable", "Small Shark"),
    (" 6' to 8' shark", "Large Shark"),
    ("Said to involve an 8' shark but more likely damage caused by debris", "not a shark"),
    ("juvenile shark", "Small Shark"),
    ("Thought to involve a 3' to 4' shark, but shark involvement not confirmed", "Small Shark"),
    ("Shark involvement not cofirmed", "unconfirmed"),
    ("Shark involvement not confirmed & highly unlikely", "not a shark"),
    ("7-gill shark?", "Large Shark"),
    ("7-gill shark", "Large Shark"),
    ("4.5 m shark", "Large Shark"),
    (r#"18" to 24" shark"#, "Large Shark"),
    ("Port Jackson shark, 1m", "Small Shark"),
    ("4 m shark", "Large Shark"),
    ("3 m to 4 m shark", "Large Shark"),
    ("Shark involvement probable, but not confirmed", "Small Shark"),
    ("Reported by media as shark attack, but shark involvement prior to death was not confirmed", "unconfirmed"),
    ("Shark involvement not confirmed; thought to be a barracuda bite", "not a shark"),
    ("2.27 m shark", "Large Shark"),
    ("1.5 to 2 m shark", "Small Shark"),
    ("9.5' shark?", "Large Shark"),
    ("3' small spotted catshark, Scyliorhinus canicula", "Small Shark"),
    ("Questionable Incident", "unconfirmed"),
    ("2.4 m shark", "Large Shark"),
    (r#"24" to 30" shark"#, "Large Shark"),
    ("2.5 to 3 m shark", "Large Shark"),
    ("2 to 3 m shark", "Large Shark"),
    ("1' to 4' shark", "Small Shark"),
    ("small catsharks", "Small Shark"),
    ("3 m, 600-kg shark", "Large Shark"),
    ("Said to involve a 1.5 m shark", "Small Shark"),
    ("2 m [6.75'] shark, 200-kg shark T", "Large Shark"),
    ("[4.5' to 5'] shark", "Small Shark"),
    ("Unknown, but it was reported that a shark tooth was recovered from the wound", "unconfirmed"),
    (r#""small shark""#, "Small Shark"),
    (r#"18" to 36" shark"#, "Large Shark"),
    ("4 m [13'] shark", "Large Shark"),
    ("3 m [10'] shark", "Large Shark"),
    ("2.4 m [8'] shark", "Large Shark"),
    ("1.2 m [4'] shark", "Small Shark"),
    ("1.8 m [6'] shark", "Small Shark"),
    ("1.2 m to 1.5 m [4' to 5'] shark", "Small Shark"),
    ("2 sharks, 4.5 m & 3 m", "Large Shark"),
    (r#""black tipped" shark"#, "Tipped Shark"),
    ("0.9 m to 1.5 m [3' to 5'] shark", "Small Shark"),
    ("2.4 m to 3.7 m [8' to 12'] shark", "Large Shark"),
    ("small sharks", "Small Shark"),
    ("Shark involvement doubtful", "undefined"),
    ("Unidentified species", "undefined"),
    ("1.5 m to 1.8 m [5' to 6'] shark", "Small Shark"),
    ("106 cm [3.5']  shark", "Small Shark"),
    ("3.7 m to 4.3 m [12' to 14'] shark", "Large Shark"),
    ("0.9 m to 1.2 m [3' to 4'] shark", "Small Shark"),
    ("A “small” shark", "Small Shark"),
    ("60 cm [2'] captive shark", "Small Shark"),
    ("Species unidentified", "unconfirmed"),
    ("3.5' to 4.5' shark", "Large Shark"),
    (r#""A pack of sharks""#, "Large Shark"),
    ("Unknown, but the shark was caught and put on exhibition", "unconfirmed"),
    (r#""a large shark""#, "Large Shark"),
    ("Questionable incident, said to involve a 6' shark", "Large Shark"),
    ("3 sharks", "Large Shark"),
    ("Not specified", "undefined"),
    ("6 ft shark", "Large Shark"),
    ("6ft shark", "Large Shark"),
    ("Bu.ll", "undefined"),
    ("7' to 8' shark", "Large Shark"),
    (" ", "not a shark"),
    ("3' to 3.5' shark", "Small Shark"),
    ("5' to 7' shark", "Large Shark"),
    ("2 sharks, 4.5 m & 3 m", "Large Shark"),
    (r#"15 cm to 20 cm [6" to 8"] bite diameter just below left knee"#, "Small Shark"),
    ("2.4 m to 3 m [8' to 10'] grey colored shark", "Large Shark"),
    ("3 m to 3.7 m [10' to 12'] shark", "Large Shark"),
    ("0.9 m  to 1.2 m [3' to 4'] shark", "Small Shark"),
    ("0.9 m to 1.2 m [3' to 4'] shark; Tooth fragment recovered from hand", "Small Shark"),
    ("1 m  shark", "Small Shark"),
    ("2.1 m to 2.4 m [7' to 8'] shark", "Large Shark"),
    ("0.9 m [3'] shark", "Small Shark"),
    ("Shark involvement prior to death unconfired", "Small Shark"),
    ("C. leucas tooth fragment recovered from kayak", "uncorfirmed"),
    ("Questionable incident - shark bite may have precipitated drowning", "unconfirmed"),
    ("Unidentified", "unconfirmed"),
    ("2' to 3.5' shark", "Small Shark"),
    ("1.5 m [5'] shark", "Small Shark"),
    ("0.9 m  [3'] shark", "Small Shark"),
    ("1.2 m to 1.5 m [4.5' to 5'] shark", "Small Shark"),
    ("1.2 m to 1.8 m [4' to 6'] shark", "Small Shark"),
    ("2.1 to 2.4 m [7' to 8'] shark", "Large Shark"),
    ("60 cm to 90 cm [2' to 3'] shark", "Small Shark"),
    ("A 2' shark was seen in the area by witnesses", "Small Shark"),
    ("Shark involvement  not confirmed", "unconfirmed"),
    ("Shark involvement  questionable", "unconfirmed"),
    ("1.3 to 1.6 m shark", "Small Shark"),
    ("200 to 300 kg shark", "Large Shark"),
    ("4.5' to 5' shark", "Small Shark"),
    ("1.7 m shark", "Small Shark"),
    ("Shark involvement prior to death suspected but not confirmed", "unconfirmed"),
    ("1.8 m to 2.1 m [6' to 7'] shark", "Large Shark"),
    (r#""a young shark""#, "Small Shark"),
    ("1.2 m to 1.5 m [4' to 5']   shark", "Small Shark"),
    ("1.5 to 1.8 m [5' to 6'] shark", "Small Shark"),
    ("Two 1.2 m to 1.5 m [4' to 5'] sharks", "Small Shark"),
    ("2.1 m [7'] shark", "Large Shark"),
    (">1.8 m [6'] shark", "Large Shark"),
    ("1.8 m to 2.4 m [6' to 8'] shark, tooth fragments recovered", "Large Shark"),
    ("Unidentified shark", "unconfirmed"),
    (">2 m shark", "Large Shark"),
    ("5 m [16.5'] shark", "Large Shark"),
    ("1.8 m grey shark", "Grey Shark"),
    ("3 m [10'], 270- kg [595-lb] shark", "Large Shark"),
    ("7' female shark", "Large Shark"),
    (r#""Shark had a very large girth""#, "Large Shark"),
    ("1.8 m [6'] shark", "Large Shark"),
    ("1.8 m to 2.4 m [6' to 8'] shark", "Large Shark"),
    ("6 m, 600-kg shark", "Large Shark"),
    ("Two sharks seen in vicinity: 2.4 m & 4.25 m  [8' & 14'] TL", "Large Shark"),
    ("2 m to 2.5 m shark", "Large Shark"),
    ("1.5 m to 2 m [5' to 6.75'] shark", "Large Shark"),
    (r#"1 m "grey-colored" shark"#, "Small Shark"),
    (r#""gray shark""#, "Grey Shark"),
    ("a school of sharks", "Large Shark"),
    (r#""Shark caught later""#, "Large Shark"),
    ("Remains recovered from shark caught days later", "unconfirmed"),
    ("234-lb shark", "Large Shark"),
    ("Said to be a 7.6 m [25'] shark", "Large Shark"),
    (r#""The fish was harpooned, dried, and presented to the sailor, who went round Europe exhibiting it  It was said to be 20 feet long."#, "Large Shark"),
    ("70 kg shark", "Small Shark"),
    ("5m, 3500 kg female shark", "Large Shark"),
    (r#""a school of sharks""#, "Large Shark"),
    (r#"250-lb "dog shark""#, "Dog Shark"),
    ("650-lb shark", "Large Shark"),
    ("2 days later a 600-lb shark was caught 100 yards from the site", "Large Shark"),
    ("7' to 8' shark", "Large Shark"),
    ("3' to 3.5' shark", "Small Shark"),
    ("5' to 7' shark", "Small Shark"),
    ("12' to 18' shark", "Large Shark"),
    ("2 sharks, 4.5 m & 3 m", "Large Shark"),
    (r#"15 cm to 20 cm [6" to 8"] bite diameter just below left knee"#, "Small Shark"),
    ("2.4 m to 3 m [8' to 10'] grey colored shark", "Grey Shark"),
    ("3 m to 3.7 m [10' to 12'] shark", "Large Shark"),
    ("0.9 m  to 1.2 m [3' to 4'] shark", "Small Shark"),
    ("0.9 m to 1.2 m [3' to 4'] shark; Tooth fragment recovered from hand", "Small Shark"),
    ("2 sharks", "Large Shark"),
    ("Identified as C. gangeticus by Dr. J. Fayrer", "unconfirmed"),
    ("Said to involve 2 sharks", "Large Shark"),
    ("Said to involve 2 sharks", "Large Shark"),
    ("4.7 m [15.5'] shark", "Large Shark"),
    ("16' shark", "Large Shark"),
    ("20' shark", "Large Shark"),
    ("1.8 m to 2.7 m [6' to 9'] shark", "Large Shark"),
    ("Fishermen recovered partial remains from shark a week later", "unconfirmed"),
    ("Remains recovered 5 days later", "unconfirmed"),
    ("Shark involvement probable", "unconfirmed"),
    ("Allegedly a 33-foot shark", "Large Shark"),
    ("Remains recovered from 3 sharks", "Large Shark"),
    ("18-foot shark", "Large Shark"),
    ("5.5' to 6' shark", "Large Shark"),
    ("Said to involve a 2.7 m [9'] shark", "Large Shark"),
    ("13' shark", "Large Shark"),
    ("3.7 m to 4.3 m [12' to 14']  shark", "Large Shark"),
    ("3.7 m [12'], 1200-lb shark. Shark caught & its jaw exhibited at the Carnegie Museum", "Large Shark"),
    ("15'", "Large Shark"),
    (r#"15* to 24" dog shark"#, "Dog Shark"),
    ("Comrades saw shark's tail appear about 5' away", "Large Shark"),
    (r#""A pack of 6 sharks""#, "Large Shark"),
    ("2.7 m [9'] shark later captured by Mitchell-Hedges", "Large Shark"),
    (r#""a very large shark""#, "Large Shark"),
    ("According to Carlsmith, the shark's mouth was 3' wide", "Large Shark"),
    ("Questionable, 2m shark suspected", "Large Shark"),
    (r#""whiptail shark" (thresher shark?)"#, "Whiptail Shark"),
    (r#""a dog shark""#, "Dog Shark"),
    ("9-foot shark", "Large Shark"),
    ("7 shark's teeth found embedded in the woodwork of the boat", "unconfirmed"),
    ("16' 800-lb shark", "Large Shark"),
    ("4.3 m [14'] shark seen in area previous week", "Large Shark"),
    ("100-lb shark", "Large Shark"),
    ("4.3 m [14'] shark seen in vicinity", "Large Shark"),
    ("0.9 m [3']  shark", "Large Shark"),
    ("18' shark", "Large Shark"),
    ("6 m [20']  shark", "Large Shark"),
    ("1.5 m, 45-kg shar", "Large Shark"),
    ("1.8 m to 2.4 m [6' to 8'] shark, tooth fragments recovered", "Large Shark"),
    ("1.8 m [6'] shark", "Large Shark"),
    ("6 m shark", "Large Shark"),
    ("2 m [6.75'] shark", "Large Shark"),
    ("40 to 50 sharks attacked survivors in the water", "Large Shark"),
    ("4.3 m shark", "Large Shark"),
    ("6', 100-lb shark", "Large Shark"),
    ("30-kg [66-lb] shark", "Small Shark"),
    ("Shark involvement not confirmed; officials considered barracua", "not a shark"),
    (".5 m shark", "Small Shark"),
    ("4.5' shark", "Small Shark"),
    ("3 m to 4 m [10' to 13'] shark", "Large Shark"),
    ("Questionable incident; reported as shark attack but thought to involve a pinniped instead", "not a shark"),
    ("Reported as a shark attack, the story was a hoax", "not a shack"),
    ("1.8 m [6'] shark, species identity questionable", "Large Shark"),
    ("13', 400-lb thresher shark", "Large Shark"),
    ("C. maculpinnis or C. limbatus", "Maculpinnis Shark"),
    ("4' to 8' shark", "Small Shark"),
    ("2.2 m shark", "Large Shark"),
    ("270 kg shark", "Large Shark"),
    ("1.5 to 2 m [5' to 6.75'] shark", "Large Shark"),
    ("2.7 m  [9'] shark", "Large Shark"),
    ("12' to 14' shark", "Large Shark"),
    ("3.7 m [12'] sharks", "Large Shark"),
    ("2 m to 2.5 m [6.75'  to 8.25'] shark", "Large Shark"),
    ("1.5 m to 2 m shark", "Large Shark"),
    (r#""Dog shark""#, "Dog Shark"),
    ("7.5' shark", "Large Shark"),
    (r#"Considered a "Doubtful" incident"#, "Unconfirmed"),
    ("4m [13'] shark", "Large Shark"),
    ("1.5 m to 1.8m [5' to 6'] shark", "Small Shark"),
    ("3.7 m [12'] shark", "Large Shark"),
    ("A pack of 6 sharks", "Large Shark"),
    ("1.5 m to 2.1 m  [5' to 7'] shark", "Large Shark"),
    ("4.6 m [15'] shark", "Large Shark"),
    ("1.8 m [6'], 180-lb shar", "Large Shark"),
    ("2 sharks involved", "Large Shark"),
    ("300-kg [662-lb] shark", "Large Shark"),
    ("1.8 m [6'], 136-kg [300-lb] shark", "Large Shark"),
    ("1.8 to 2.4 m [6' to 8'] shark", "Large Shark"),
    ("Less than 1.2 m [4']", "Small Shark"),
    ("1.7 m [5.5'] shark", "Small Shark"),
    ("2.1 m to 2.4 m  [7' to 8'] shark", "Large Shark"),
    ("1.8 m [6']  shark", "Large Shark"),
    ("4.3 m [14'], 1000-lb shark", "Large Shark"),
    ("500-lb shark", "Large Shark"),
    ("5.5 m [18'] shark", "Large Shark"),
    ("8 sharks", "Large Shark"),
    ("1.8 m to 2.4 m  [6' to 8'] shark", "Large Shark"),
    ("3.7 to 4.5 m [12' to 15'] shark seen in vicinity", "Large Shark"),
    ("Said to be 6.4 m [21'] shark", "Large Shark"),
    ("2 sharks, 4.5 m & 3 m", "Large Shark"),
    ("1.8 m [6'], 180-lb shark", "Large Shark"),
    ("2.7 m [9'] shark", "Large Shark"),
    ("2.5 m [8.25'] shark", "Large Shark"),
    ("4.3 m [14'] shark", "Large Shark"),
    ("3.5 m shark", "Large Shark"),
    ("2.7 m to 3 m [9' to 10'] sharks", "Large Shark"),
    ("4.9 m [16']shark", "Large Shark"),
    ("1.2 m  [4'] shark", "Large Shark"),
    ("Next morning a 3 m [10'] shark was caught that had Andrews' leg in its gut", "Large Shark"),
    ("Two shark's teeth recovered from canoe", "unconfirmed"),
    ("1.5 m to 1.8 m  [5' to 6'] shark", "Small Shark"),
    (r#"43" shark"#, "Small Shark"),
    ("2.4 m [8'], 600-lb shark", "Large Shark"),
    ("80-lb hooked shark", "Small Shark"),
    ("200-lb shark", "Large Shark"),
    ("7' to 8' shark", "Large Shark"),
    ("Injury believed caused by an eel, not a shark", "not a shark"),
    ("3.5 m [11.5']shark", "Large Shark"),
    ("[4' to 5']", "Large Shark"),
    ("2 sharks, 4.5 m & 3 m", "Large Shark"),
    ("6 m [20'] shark", "Large Shark"),
    ("3.7 m to 4.6 m [12' to 15'] shark seen in the vicinity", "Large Shark"),
    ("1.8 m to 2.4 m [6' to 8'] shark, tooth fragments recovered", "Large Shark"),
    ("1.8 m [6'] shark", "Large Shark"),
    ("150-lb shark", "Large Shark"),
    ("1.6 m shark", "Small Shark"),
    ("Questionable incident; reported as shark attack but thought to involve a pinniped instead", "unconfirmed"),
    ("1.5 m [5']  shark", "Small Shark"),
    ("1.2 m to 1.8 m [4' to 6'] shark observed in area", "Small Shark"),
    (r#"90-kg "blackfin" shark"#, "Blackfin Shark"),
    ("60 cm  shark", "Small Shark"),
    (r#"36"  shark"#, "Small Shark"),
    ("2.7 m [9']shark", "Large Shark"),
    ("1.2 m [4'], possibly  larger shark", "Small Shark"),
    ("Two 2.1 m [7'] sharks", "Large Shark"),
    ("3.7 m to 4.6 m [12' to 15'] shark", "Large Shark"),
    ("2.7 m [9']  shark", "Large Shark"),
    ("3.5 m [11.5'] shark", "Large Shark"),
    ("3 m to 4.3 m [10' to 14'] shark", "Large Shark"),
    ("5.5' shark", "Small Shark"),
    ("20 kg shark", "Small Shark"),
    ("1.8 to 2.1 m [6' to 7'] shark", "Large Shark"),
    ("Bitten by several 1.8 m [6'] sharks", "Large Shark"),
    ("Injury believed caused by an eel, not a shark", "not a shark"),
    ("2 sharks, 4.5 m & 3 m", "Large Shark"),
    ("1.2 m [4'], possibly  larger shark", "Large Shark"),
    ("Two 2.1 m [7'] sharks", "Large Shark"),
    ("Shark involvement prior to deaths was not confirmed", "Small Shark"),
    ("3.5 m [11.5'] shark", "Large Shark"),
    ("6 m [20'] shark", "Large Shark"),
    ("20 kg shark", "Small Shark"),
    ("1.8 to 2.1 m [6' to 7'] shark", "Large Shark"),
    ("Said to involve 2 sharks: 5.2 m & 6 m [17' & 20']", "Large Shark"),
    ("Sharks averaged 1.8 m [6'] in length", "Large Shark"),
    ("8-lb shark", "Small Shark"),
    ("2.4 m [8']  shark", "Large Shark"),
    ("4 m [13'] shark x 6", "Large Shark"),
    ("Reported as  a shark bite but toothmarks appear to be those of a dolphin", "not a shark"),
    ("0.7 m [2.5'] shark", "Small Shark"),
    ("2.13 m shark", "Large Shark"),
    ("Possibly C. leucas", "C. leucas Shark"),
    ("1.5 m, 45-kg shark", "Small Shark"),
    ("2.3 m [7'] shark", "Large Shark"),
    ("3.7 [12'] shark", "Large Shark"),
    ("3 m [10'] shark seen in vicinity", "Large Shark"),
    ("1,100-lb shark", "Large Shark"),
    ("1.5 m, 45-kg shark", "Small Shark"),
    ("60 cm  shark", "Small Shark"),
    ("1.4 m [4.5'] shark", "Small Shark"),
    ("5m shark", "Large Shark"),
    ("2.6 m [8.5'] shark landed 2 hours later", "Large Shark"),
    ("2.6 m [8.5'] shark", "Large Shark"),
    ("4.4 m [14'] shark", "Large Shark"),
    (r#"68" shark"#, "Small Shark"),
    ("Description of shark does not ring true", "unconfirmed"),
    ("1.8 m [6'] shark", "Large Shark"),
];

/// Layer 3: leftover placeholder phrases collapsed to `NA`
pub const SPECIES_PLACEHOLDERS: &[(&str, &str)] = &[
    (" ", "NA"),
    ("no shark involvement", "NA"),
    ("no shark invovlement", "NA"),
    ("no shark invovlement - it ws a publicity stunt", "NA"),
    ("Invalid", "NA"),
    ("Invalid incident", "NA"),
    ("Questionable", "NA"),
    ("Questionable incident", "NA"),
    ("No shark involvement", "NA"),
    ("1NAm NA] shark", "NA"),
    ("Shark involvement prior to death was not confirmed", "NA"),
    ("Shark involvement not confirmed ", "NA"),
    ("NA shark ", "NA"),
    ("1NAm shark", "NA"),
    ("4' shark", "NA"),
    ("6' shark", "NA"),
    ("4' toNA shark", "NA"),
    ("2NAm NA] shark", "NA"),
    ("3' shark", "NA"),
    ("5' shark", "NA"),
    ("3' toNA shark", "NA"),
    ("2 m shark", "NA"),
    ("3 m NA'] shark", "NA"),
    ("3 m shark", "NA"),
    ("1NAm toNA5 m NA toNA] shark", "NA"),
    ("3NAm NA'] shark", "NA"),
    ("7' shark", "NA"),
    ("8' shark", "NA"),
    ("5' toNA shark", "NA"),
    ("2NAm shark", "NA"),
    ("2' toNA shark", "NA"),
    ("a small shark", "NA"),
    ("Shark involvement prior to death not confirmed", "NA"),
    ("1 m shark", "NA"),
    ("Shark involvement not confirmed", "NA"),
    ("Shark involvement prior to death unconfirmed", "NA"),
    ("Shark involvement prior to death could not be determined", "NA"),
    ("Shark involvement suspected but not confirmed", "NA"),
    ("NA shark", "NA"),
];

/// Species values that mark a record as unresolved. Records carrying one of
/// these are removed by the row filter.
pub const SPECIES_SENTINELS: &[&str] = &[
    "NA",
    "Unconfirmed",
    "undefined",
    "Not authenticated",
    "uncorfirmed",
    "unconfirmed",
    "not a shark",
    "not a shack",
    " ",
];

/// Layer 1 needles lowered once
pub static LOWERED_ALIASES: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    SPECIES_ALIASES
        .iter()
        .map(|(needle, label)| (needle.to_lowercase(), *label))
        .collect()
});

/// Layer 2 as an exact-match map (later declarations override earlier ones)
pub static PHRASE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SPECIES_PHRASES.iter().copied().collect());

/// Layer 3 as an exact-match map
pub static PLACEHOLDER_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SPECIES_PLACEHOLDERS.iter().copied().collect());

/// Whether a resolved species label is one of the unresolved sentinels
pub fn is_sentinel(label: &str) -> bool {
    SPECIES_SENTINELS.contains(&label)
}
