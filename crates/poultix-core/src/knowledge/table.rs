//! Built-in poultry disease table.
//!
//! Ranges are chosen so the healthy band (6.5 - 7.5) carries no candidate.
//! Any edit must keep every range inside 0 - 14 with `min <= max`.

use crate::models::{DiseaseCategory, DiseaseRecord, PhRange, Severity};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The default records, in table order (ties in ranking keep this order).
pub fn default_records() -> Vec<DiseaseRecord> {
    vec![
        // Acidosis
        DiseaseRecord {
            name: "Severe Metabolic Acidosis".into(),
            category: DiseaseCategory::Acidosis,
            ph_range: PhRange::new(0.0, 4.5),
            aliases: strings(&["metabolic acidosis"]),
            symptoms: strings(&[
                "Rapid deep breathing",
                "Extreme lethargy and collapse",
                "Cyanotic comb and wattles",
                "Watery droppings",
                "Sudden death in severe cases",
            ]),
            causes: strings(&[
                "Prolonged diarrhoea with bicarbonate loss",
                "Kidney failure",
                "Toxin or mycotoxin ingestion",
                "Severe dehydration",
            ]),
            quick_measures: strings(&[
                "Isolate affected birds immediately",
                "Give sodium bicarbonate in drinking water (1 g per litre)",
                "Provide fresh electrolyte solution",
                "Remove suspect feed and check for mycotoxins",
                "Contact a veterinarian within the hour",
            ]),
            treatment: "Correct acidosis with oral sodium bicarbonate and electrolytes under \
                        veterinary supervision; address the primary cause (toxin, renal or \
                        enteric disease) and re-test pH every 6 hours until stable."
                .into(),
            severity: Severity::Critical,
            mortality: "Very high (40-60% if untreated)".into(),
        },
        DiseaseRecord {
            name: "Lactic Acidosis".into(),
            category: DiseaseCategory::Acidosis,
            ph_range: PhRange::new(3.5, 5.0),
            aliases: strings(&["grain overload", "lactic acidosis"]),
            symptoms: strings(&[
                "Distended crop",
                "Depression and reluctance to move",
                "Sour-smelling droppings",
                "Reduced water intake",
            ]),
            causes: strings(&[
                "Sudden access to large amounts of grain",
                "Abrupt change to a high-starch ration",
                "Fermented or wet feed",
            ]),
            quick_measures: strings(&[
                "Withdraw grain and provide roughage only",
                "Add sodium bicarbonate to water (0.5 g per litre)",
                "Ensure unlimited clean water",
                "Reintroduce grain gradually over 5-7 days",
            ]),
            treatment: "Buffer the digestive tract with sodium bicarbonate, restrict \
                        carbohydrates for several days and support gut flora with probiotics."
                .into(),
            severity: Severity::High,
            mortality: "Moderate (10-20%)".into(),
        },
        DiseaseRecord {
            name: "Sour Crop".into(),
            category: DiseaseCategory::Acidosis,
            ph_range: PhRange::new(4.0, 6.0),
            aliases: strings(&["sour crop", "crop mycosis", "candidiasis", "thrush"]),
            symptoms: strings(&[
                "Squishy fluid-filled crop",
                "Foul sour breath",
                "Crop not emptying overnight",
                "Regurgitation",
                "Weight loss",
            ]),
            causes: strings(&[
                "Candida yeast overgrowth",
                "Mouldy or fermented feed",
                "Long stringy grass impaction",
                "Prolonged antibiotic use",
            ]),
            quick_measures: strings(&[
                "Withhold feed for 24 hours, water only",
                "Add apple cider vinegar to water (1 tablespoon per litre)",
                "Gently massage the crop twice daily",
                "Offer plain yoghurt or probiotics after fasting",
                "Remove mouldy feed and clean feeders",
            ]),
            treatment: "Fast the bird, restore crop flora with probiotics, and give an \
                        antifungal (nystatin) for 7-10 days if yeast is confirmed."
                .into(),
            severity: Severity::High,
            mortality: "Low to moderate (5-15%)".into(),
        },
        // Alkalosis
        DiseaseRecord {
            name: "Respiratory Alkalosis".into(),
            category: DiseaseCategory::Alkalosis,
            ph_range: PhRange::new(7.6, 8.5),
            aliases: strings(&["heat stress", "respiratory alkalosis"]),
            symptoms: strings(&[
                "Open-mouth panting",
                "Wings held away from body",
                "Thin-shelled eggs",
                "Drop in feed intake",
                "Lethargy during hot hours",
            ]),
            causes: strings(&[
                "High house temperature",
                "Poor ventilation",
                "Excessive panting exhaling carbon dioxide",
                "Overcrowding",
            ]),
            quick_measures: strings(&[
                "Move birds to shade and increase ventilation",
                "Provide cool water with electrolytes",
                "Add ammonium chloride to water (0.3%) to counter alkalosis",
                "Reduce stocking density",
                "Feed during the cooler hours of the day",
            ]),
            treatment: "Lower ambient temperature, supply electrolytes and vitamin C, and use \
                        an acidifying water additive until panting stops."
                .into(),
            severity: Severity::High,
            mortality: "Moderate (10-30% in heat waves)".into(),
        },
        DiseaseRecord {
            name: "Severe Metabolic Alkalosis".into(),
            category: DiseaseCategory::Alkalosis,
            ph_range: PhRange::new(8.5, 14.0),
            aliases: strings(&["metabolic alkalosis"]),
            symptoms: strings(&[
                "Muscle tremors and twitching",
                "Shallow slow breathing",
                "Weakness and paralysis",
                "Convulsions",
            ]),
            causes: strings(&[
                "Excess sodium bicarbonate or limestone in ration",
                "Persistent vomiting or crop loss",
                "Diuretic or alkaline water sources",
            ]),
            quick_measures: strings(&[
                "Stop all bicarbonate and alkaline supplements immediately",
                "Switch to a clean neutral water source",
                "Give acidified water (vinegar 1 tablespoon per litre)",
                "Isolate birds showing tremors",
                "Contact a veterinarian urgently",
            ]),
            treatment: "Remove the alkalising source, correct electrolytes with chloride-rich \
                        solutions under veterinary supervision and review the mineral mix."
                .into(),
            severity: Severity::Critical,
            mortality: "High (30-50% if untreated)".into(),
        },
        DiseaseRecord {
            name: "Ammonia Toxicity".into(),
            category: DiseaseCategory::Alkalosis,
            ph_range: PhRange::new(8.0, 9.5),
            aliases: strings(&["ammonia"]),
            symptoms: strings(&[
                "Watery red eyes",
                "Sneezing and respiratory irritation",
                "Reduced growth",
                "Blindness in severe cases",
            ]),
            causes: strings(&[
                "Wet caked litter",
                "Poor ventilation",
                "High-protein diet breaking down in litter",
            ]),
            quick_measures: strings(&[
                "Ventilate the house immediately",
                "Remove wet litter and replace with dry bedding",
                "Treat litter with an acidifier",
                "Check drinkers for leaks",
            ]),
            treatment: "Reduce ammonia below 25 ppm through ventilation and litter management; \
                        treat eye lesions with saline washes."
                .into(),
            severity: Severity::Medium,
            mortality: "Low (under 5%)".into(),
        },
        // Nutritional
        DiseaseRecord {
            name: "Visceral Gout".into(),
            category: DiseaseCategory::Nutritional,
            ph_range: PhRange::new(7.8, 9.0),
            aliases: strings(&["gout", "urolithiasis", "kidney stones"]),
            symptoms: strings(&[
                "White chalky droppings",
                "Swollen joints",
                "Dehydration and shrunken comb",
                "Sudden death of laying hens",
            ]),
            causes: strings(&[
                "Excess calcium in grower ration",
                "Kidney damage from infectious bronchitis",
                "Water deprivation",
                "High dietary protein",
            ]),
            quick_measures: strings(&[
                "Provide unlimited fresh water",
                "Switch growers to a low-calcium ration",
                "Add a urinary acidifier to water",
                "Review protein levels in the feed",
            ]),
            treatment: "Correct calcium and protein levels, acidify water to dissolve urates \
                        and support kidney function with electrolytes."
                .into(),
            severity: Severity::High,
            mortality: "Moderate (10-20%)".into(),
        },
        DiseaseRecord {
            name: "Rickets".into(),
            category: DiseaseCategory::Nutritional,
            ph_range: PhRange::new(7.6, 8.4),
            aliases: strings(&["rickets", "calcium deficiency", "vitamin d"]),
            symptoms: strings(&[
                "Soft rubbery beak and bones",
                "Lameness and reluctance to walk",
                "Beaded ribs",
                "Stunted growth",
            ]),
            causes: strings(&[
                "Vitamin D3 deficiency",
                "Calcium to phosphorus imbalance",
                "No access to sunlight",
            ]),
            quick_measures: strings(&[
                "Supplement vitamin D3 in water for 5 days",
                "Correct the calcium to phosphorus ratio (2:1)",
                "Allow access to direct sunlight",
                "Separate lame birds from the flock",
            ]),
            treatment: "Give vitamin D3 at three times the normal dose for 2 weeks and correct \
                        the mineral balance of the ration."
                .into(),
            severity: Severity::Medium,
            mortality: "Low (under 5%)".into(),
        },
        DiseaseRecord {
            name: "Crazy Chick Disease".into(),
            category: DiseaseCategory::Nutritional,
            ph_range: PhRange::new(6.0, 6.4),
            aliases: strings(&["crazy chick", "encephalomalacia", "vitamin e"]),
            symptoms: strings(&[
                "Loss of coordination",
                "Head retraction and twisting",
                "Falling over backwards",
                "Paralysis of legs",
            ]),
            causes: strings(&[
                "Vitamin E deficiency",
                "Selenium deficiency",
                "Rancid fats in feed",
            ]),
            quick_measures: strings(&[
                "Give vitamin E and selenium supplement",
                "Replace feed containing rancid fat",
                "Keep affected chicks warm and separated",
                "Hand-feed chicks unable to reach feeders",
            ]),
            treatment: "Oral vitamin E (300 IU per bird) with selenium for 7 days; early cases \
                        recover, advanced neurological damage may be permanent."
                .into(),
            severity: Severity::Medium,
            mortality: "Moderate (up to 20% in chicks)".into(),
        },
        // Infection
        DiseaseRecord {
            name: "Coccidiosis".into(),
            category: DiseaseCategory::Infection,
            ph_range: PhRange::new(5.8, 6.4),
            aliases: strings(&["cocci", "coccidiosis"]),
            symptoms: strings(&[
                "Bloody droppings",
                "Ruffled feathers",
                "Huddling and depression",
                "Pale comb",
                "Reduced feed intake",
            ]),
            causes: strings(&[
                "Eimeria parasites",
                "Wet litter",
                "Overcrowding",
                "Contaminated feed or water",
            ]),
            quick_measures: strings(&[
                "Start amprolium in drinking water",
                "Remove and replace wet litter",
                "Separate birds passing bloody droppings",
                "Add vitamins A and K to water",
                "Disinfect feeders and drinkers",
            ]),
            treatment: "Amprolium (0.024%) in drinking water for 5-7 days, then a preventive \
                        dose for 1-2 weeks; keep litter dry."
                .into(),
            severity: Severity::High,
            mortality: "High (up to 50% in young birds)".into(),
        },
        DiseaseRecord {
            name: "Necrotic Enteritis".into(),
            category: DiseaseCategory::Infection,
            ph_range: PhRange::new(5.0, 6.2),
            aliases: strings(&["necrotic enteritis", "clostridium"]),
            symptoms: strings(&[
                "Dark tarry droppings",
                "Sudden severe depression",
                "Ruffled feathers",
                "Rapid death within hours",
            ]),
            causes: strings(&[
                "Clostridium perfringens overgrowth",
                "Intestinal damage from coccidiosis",
                "High wheat or barley diets",
            ]),
            quick_measures: strings(&[
                "Start veterinary-prescribed antibiotic (amoxicillin or bacitracin)",
                "Remove dead birds immediately",
                "Treat any concurrent coccidiosis",
                "Add probiotics once antibiotics finish",
            ]),
            treatment: "Amoxicillin or bacitracin in water for 5 days per veterinary \
                        prescription, followed by probiotics and coccidiosis control."
                .into(),
            severity: Severity::Critical,
            mortality: "Very high (up to 50%)".into(),
        },
        DiseaseRecord {
            name: "Colibacillosis".into(),
            category: DiseaseCategory::Infection,
            ph_range: PhRange::new(5.0, 6.0),
            aliases: strings(&["colibacillosis", "e. coli", "e.coli"]),
            symptoms: strings(&[
                "Swollen abdomen in chicks",
                "Diarrhoea",
                "Respiratory distress",
                "Poor growth",
            ]),
            causes: strings(&[
                "Escherichia coli in contaminated water",
                "Poor hatchery hygiene",
                "Secondary to respiratory viruses",
            ]),
            quick_measures: strings(&[
                "Chlorinate drinking water",
                "Clean and disinfect drinkers daily",
                "Start antibiotic after sensitivity test",
                "Improve ventilation",
            ]),
            treatment: "Antibiotic chosen by sensitivity testing (often enrofloxacin or \
                        tetracycline) for 5-7 days, plus water sanitation."
                .into(),
            severity: Severity::High,
            mortality: "Moderate (5-20%)".into(),
        },
        DiseaseRecord {
            name: "Salmonellosis".into(),
            category: DiseaseCategory::Infection,
            ph_range: PhRange::new(7.6, 8.2),
            aliases: strings(&["salmonella", "pullorum", "fowl typhoid"]),
            symptoms: strings(&[
                "White pasty vent",
                "Greenish-yellow diarrhoea",
                "Drowsiness and weakness",
                "Increased thirst",
            ]),
            causes: strings(&[
                "Salmonella bacteria from carriers",
                "Rodent contamination",
                "Infected hatching eggs",
            ]),
            quick_measures: strings(&[
                "Isolate sick birds",
                "Start antibiotic per veterinary advice",
                "Control rodents around feed stores",
                "Disinfect the house and equipment",
                "Wear gloves (zoonotic risk)",
            ]),
            treatment: "Antibiotic therapy on veterinary prescription, culling of carriers and \
                        strict biosecurity; report if the strain is notifiable."
                .into(),
            severity: Severity::High,
            mortality: "High (up to 80% in chicks)".into(),
        },
        DiseaseRecord {
            name: "Newcastle Disease".into(),
            category: DiseaseCategory::Infection,
            ph_range: PhRange::new(7.8, 8.8),
            aliases: strings(&["newcastle"]),
            symptoms: strings(&[
                "Twisted neck",
                "Gasping and coughing",
                "Greenish watery diarrhoea",
                "Sudden drop in egg production",
                "Paralysis",
            ]),
            causes: strings(&[
                "Avian paramyxovirus type 1",
                "Contact with wild birds",
                "Unvaccinated flock",
            ]),
            quick_measures: strings(&[
                "Quarantine the entire flock",
                "Notify the veterinary authority",
                "Vaccinate healthy birds in contact",
                "Stop all bird movement on and off the farm",
                "Disinfect vehicles and footwear",
            ]),
            treatment: "No curative treatment; supportive care with vitamins and electrolytes, \
                        emergency vaccination of unaffected birds and official control \
                        measures."
                .into(),
            severity: Severity::Critical,
            mortality: "Very high (up to 100% for virulent strains)".into(),
        },
        DiseaseRecord {
            name: "Infectious Bronchitis".into(),
            category: DiseaseCategory::Infection,
            ph_range: PhRange::new(8.0, 9.0),
            aliases: strings(&["bronchitis"]),
            symptoms: strings(&[
                "Coughing and rales",
                "Nasal discharge",
                "Misshapen wrinkled eggs",
                "Wet droppings from kidney damage",
            ]),
            causes: strings(&[
                "Avian coronavirus",
                "Airborne spread between houses",
                "Lapsed vaccination",
            ]),
            quick_measures: strings(&[
                "Raise house temperature by 2-3 degrees",
                "Give electrolytes and vitamins in water",
                "Reduce dietary protein to protect kidneys",
                "Review the vaccination schedule",
            ]),
            treatment: "Supportive care with warmth and electrolytes; antibiotics only for \
                        secondary bacterial infection; vaccinate replacement stock."
                .into(),
            severity: Severity::High,
            mortality: "Moderate (up to 25% in chicks)".into(),
        },
    ]
}
