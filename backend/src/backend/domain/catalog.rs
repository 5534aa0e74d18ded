//! Built-in milestone catalog for weeks 0-16.
//!
//! Clinical content references AAP (American Academy of Pediatrics),
//! CDC (Centers for Disease Control and Prevention), and WHO
//! (World Health Organization) guidance.

use shared::{MilestoneCategory, NewMilestone};

fn entry(
    week_number: u8,
    category: MilestoneCategory,
    title: &str,
    description: &str,
    source: &str,
    parent_action: &str,
    is_concern_flag: bool,
) -> NewMilestone {
    NewMilestone {
        week_number,
        category,
        title: title.to_string(),
        description: description.to_string(),
        source: Some(source.to_string()),
        parent_action: Some(parent_action.to_string()),
        is_concern_flag,
    }
}

/// The full catalog inserted on first startup.
pub fn default_catalog() -> Vec<NewMilestone> {
    use MilestoneCategory::*;

    vec![
        // Weeks 0-2 (newborn period)
        entry(
            0,
            Motor,
            "Flexed posture at rest",
            "Newborns maintain a curled, flexed posture with arms and legs drawn close to the body, reflecting normal muscle tone from the fetal position.",
            "AAP",
            "Allow unrestricted movement during diaper changes to let baby stretch naturally. Avoid tight swaddling of the hips.",
            false,
        ),
        entry(
            0,
            Motor,
            "Reflexive grasp",
            "When you place a finger in the newborn's palm, they will reflexively close their fingers around it (palmar grasp reflex).",
            "AAP",
            "Gently place your finger in baby's palm to feel the grasp. This reflex is a sign of healthy neurological function.",
            false,
        ),
        entry(
            1,
            Motor,
            "Head turns side to side when prone",
            "During supervised tummy time, a newborn can briefly lift and turn their head to clear their airway. Head control is still very limited and the head must always be supported.",
            "AAP",
            "Begin brief, supervised tummy-time sessions (1-2 minutes) on your chest or on a firm surface while baby is awake and alert.",
            false,
        ),
        entry(
            0,
            Motor,
            "Absent or very weak reflexes",
            "If the baby shows no rooting, sucking, Moro (startle), or grasp reflexes, or the reflexes are markedly asymmetric, this may indicate a neurological concern.",
            "AAP",
            "Mention any absent or one-sided reflexes to your pediatrician at the first well-child visit.",
            true,
        ),
        entry(
            0,
            Sensory,
            "Focuses on faces at close range",
            "Newborns can see objects best at 8-12 inches away, roughly the distance to a parent's face during feeding. Vision is blurry beyond this range.",
            "AAP",
            "Hold your face 8-12 inches from baby during feeds and interaction. Use slow, exaggerated facial expressions.",
            false,
        ),
        entry(
            1,
            Sensory,
            "Startles to loud sounds",
            "The Moro (startle) reflex is triggered by sudden loud noises. Baby may throw arms outward and cry. This demonstrates intact hearing and neurological pathways.",
            "CDC",
            "Observe whether baby reacts to sudden sounds. If there is no startle response by 2 weeks, mention it to your pediatrician.",
            false,
        ),
        entry(
            0,
            Sensory,
            "No response to loud sounds",
            "If the newborn does not startle, blink, or show any reaction to loud noises, this may indicate a hearing concern that warrants follow-up after the newborn hearing screen.",
            "CDC",
            "Ensure the newborn hearing screening is completed before hospital discharge. Discuss results with your pediatrician.",
            true,
        ),
        entry(
            0,
            Communication,
            "Crying as primary communication",
            "Crying is the newborn's only way to signal hunger, discomfort, tiredness, or overstimulation. Different cries may begin to sound distinct over the first weeks.",
            "AAP",
            "Respond promptly to cries. You cannot spoil a newborn. Try a checklist: hungry, wet diaper, too warm/cold, needs comfort.",
            false,
        ),
        entry(
            2,
            Communication,
            "Quiets when picked up or hears a voice",
            "By about two weeks, many babies will briefly calm or become alert when they hear a familiar voice or are held close.",
            "AAP",
            "Talk and sing to your baby frequently, even during routine care like diaper changes. Your voice is deeply soothing.",
            false,
        ),
        entry(
            0,
            Feeding,
            "Rooting and sucking reflexes",
            "When the corner of the mouth or cheek is stroked, the baby turns toward the stimulus and opens their mouth (rooting). Once latched, the sucking reflex allows feeding.",
            "AAP",
            "Stroke baby's cheek gently to encourage latching during breastfeeding. If bottle-feeding, touch the nipple to the corner of the mouth.",
            false,
        ),
        entry(
            1,
            Feeding,
            "Feeds 8-12 times per 24 hours",
            "Newborns have small stomachs and need frequent feeds. Breastfed babies typically nurse 8-12 times; formula-fed babies take 1-2 oz every 2-3 hours in the first week.",
            "AAP",
            "Feed on demand. Track wet and dirty diapers (at least 6 wet diapers/day by day 5) to confirm adequate intake.",
            false,
        ),
        entry(
            0,
            Feeding,
            "Difficulty latching or very weak suck",
            "Persistent inability to latch or an extremely weak suck can lead to inadequate nutrition and dehydration. This may signal tongue-tie, prematurity effects, or other concerns.",
            "AAP",
            "If baby cannot sustain a latch or falls asleep immediately at every feed, contact your pediatrician or a lactation consultant within the first 48 hours.",
            true,
        ),
        entry(
            0,
            Sleep,
            "Sleeps 16-17 hours in short bursts",
            "Newborns sleep in 2-4 hour stretches around the clock with no established circadian rhythm. They wake frequently for feeding.",
            "AAP",
            "Always place baby on their back on a firm, flat surface with no loose bedding. Room-share without bed-sharing for the first 6 months.",
            false,
        ),
        entry(
            2,
            Sleep,
            "Day-night confusion common",
            "Newborns have not yet developed a circadian rhythm and may sleep longer during the day and be more wakeful at night.",
            "CDC",
            "Expose baby to natural daylight during awake periods and keep nighttime feeds calm, dim, and quiet to begin establishing day-night patterns.",
            false,
        ),
        entry(
            0,
            SocialEmotional,
            "Prefers human faces",
            "From birth, newborns are drawn to face-like patterns and will gaze at a face longer than at other visual stimuli.",
            "CDC",
            "Make plenty of face-to-face contact. Hold baby close and let them study your face during alert periods.",
            false,
        ),
        entry(
            2,
            SocialEmotional,
            "Calms with skin-to-skin contact",
            "Skin-to-skin (kangaroo) care regulates the newborn's temperature, heart rate, and breathing while promoting bonding and reducing crying.",
            "WHO",
            "Practice skin-to-skin holding daily. Place baby in just a diaper against your bare chest and cover with a blanket.",
            false,
        ),
        entry(
            1,
            Cognitive,
            "Recognizes parent's voice",
            "Research shows that newborns can distinguish their mother's voice from other voices within the first days of life, a result of prenatal auditory exposure.",
            "AAP",
            "Narrate daily routines to your baby. Describe what you are doing; this builds language exposure from day one.",
            false,
        ),
        // Weeks 3-4
        entry(
            3,
            Motor,
            "Arm and leg movements become smoother",
            "The jerky, uncoordinated movements of the first weeks begin to smooth out slightly as the nervous system matures.",
            "CDC",
            "Give baby floor time on a blanket so they can move freely. Avoid keeping baby in a car seat or swing for extended periods.",
            false,
        ),
        entry(
            4,
            Motor,
            "Briefly lifts head during tummy time",
            "At about one month, many babies can lift their head at a 45-degree angle for a few seconds during tummy time.",
            "AAP",
            "Increase tummy time to 3-5 minutes several times a day. Get down at baby's level and talk to encourage head lifting.",
            false,
        ),
        entry(
            3,
            Sensory,
            "Begins to track moving objects briefly",
            "Baby may follow a slowly moving object or face with their eyes through a small arc (not yet full 180 degrees).",
            "AAP",
            "Slowly move a high-contrast toy or your face from side to side about 10 inches from baby's eyes and watch for tracking.",
            false,
        ),
        entry(
            4,
            Sensory,
            "Prefers bold, high-contrast patterns",
            "Newborn vision is best stimulated by black-and-white or high-contrast patterns, as color vision is still immature.",
            "CDC",
            "Use high-contrast cards or books during short alert periods. Hold them 8-12 inches from baby's face.",
            false,
        ),
        entry(
            4,
            Communication,
            "Begins making small throat sounds",
            "Around one month, babies start making soft cooing or gurgling sounds in addition to crying, the earliest form of pre-linguistic vocalization.",
            "CDC",
            "When baby coos, pause and respond as if having a conversation. This 'serve and return' interaction builds communication skills.",
            false,
        ),
        entry(
            3,
            Feeding,
            "Cluster feeding episodes",
            "Around 3 weeks, babies often go through a growth spurt and may want to feed very frequently (cluster feed), sometimes every hour for several hours.",
            "AAP",
            "Cluster feeding is normal and helps increase milk supply. Feed on demand and ensure you stay hydrated and rested.",
            false,
        ),
        entry(
            4,
            Feeding,
            "Takes 3-4 oz per bottle feed",
            "Formula-fed babies at one month typically consume 3-4 ounces per feed, roughly every 3-4 hours. Breastfed babies continue on demand.",
            "AAP",
            "Pace bottle feeds to prevent overfeeding: hold the bottle horizontally, allow pauses, and watch for fullness cues.",
            false,
        ),
        entry(
            4,
            Sleep,
            "May begin slightly longer sleep stretches at night",
            "Some one-month-olds start sleeping one longer stretch of 3-4 hours at night, though frequent waking remains normal.",
            "AAP",
            "Continue safe sleep practices. Begin a simple bedtime routine (dim lights, quiet voice, swaddle) to signal nighttime.",
            false,
        ),
        entry(
            4,
            SocialEmotional,
            "First social smile may emerge",
            "Between 4 and 6 weeks, many babies produce their first true social smile, a smile in direct response to a face or voice rather than a reflex.",
            "CDC",
            "Smile and make animated faces when baby is calm and alert. Give them time to respond; smiling is a learned social skill.",
            false,
        ),
        entry(
            4,
            SocialEmotional,
            "No social smile by 6 weeks",
            "If a baby has not produced any social smile by 6 weeks of age, it may be worth discussing with a pediatrician, though some healthy babies smile a bit later.",
            "AAP",
            "Keep engaging face-to-face, but if no smile appears by the 6-week check-up, raise it with your doctor.",
            true,
        ),
        entry(
            3,
            Cognitive,
            "Distinguishes parent's scent",
            "By 3 weeks, babies reliably turn toward a cloth carrying their mother's scent, demonstrating early olfactory memory.",
            "AAP",
            "Leave a worn t-shirt near (not in) the sleep area to provide comforting scent during brief separations.",
            false,
        ),
        // Weeks 5-6
        entry(
            5,
            Motor,
            "Holds head steadier when upright",
            "When held against a shoulder, the baby can keep their head upright for longer periods, though it still bobs.",
            "AAP",
            "Hold baby upright on your shoulder after feeds. Continue supporting the head but let them practice control.",
            false,
        ),
        entry(
            6,
            Motor,
            "Pushes up slightly during tummy time",
            "Baby may push up on forearms briefly, lifting the chest a small amount off the surface during tummy time.",
            "CDC",
            "Place a small rolled towel under baby's chest for support. Use toys or your face at eye level to motivate lifting.",
            false,
        ),
        entry(
            6,
            Sensory,
            "Tracks a moving object through 90 degrees",
            "Visual tracking improves so baby can follow an object or face through roughly a 90-degree arc from midline.",
            "AAP",
            "Slowly move a colorful toy in an arc in front of baby. If eyes consistently fail to follow, mention it at your visit.",
            false,
        ),
        entry(
            6,
            Sensory,
            "Eyes do not follow a moving object at all",
            "By 6 weeks, most babies should demonstrate some visual tracking. Complete absence of tracking may indicate a visual or neurological concern.",
            "AAP",
            "If baby never follows a face or object by 6 weeks, raise this with your pediatrician for evaluation.",
            true,
        ),
        entry(
            5,
            Communication,
            "Cooing with vowel-like sounds",
            "Babies begin to produce 'aah' and 'ooh' sounds, especially when content and engaged with a caregiver.",
            "CDC",
            "Imitate baby's sounds back to them. Wait for a response and then reply again; this teaches conversational turn-taking.",
            false,
        ),
        entry(
            6,
            Communication,
            "Different cries for different needs",
            "Parents often begin to recognize distinct cries for hunger, tiredness, pain, or discomfort around this age.",
            "AAP",
            "Pay attention to cry patterns. A short, rhythmic cry often means hunger; a sharp, sudden cry may signal pain.",
            false,
        ),
        entry(
            6,
            Feeding,
            "Growth spurt increases feeding demand",
            "A growth spurt around 6 weeks often causes increased hunger and fussiness. Baby may feed more frequently for 2-3 days.",
            "AAP",
            "Follow baby's hunger cues and feed on demand during growth spurts. Supply will adjust within a few days.",
            false,
        ),
        entry(
            5,
            Sleep,
            "Begins to show drowsy cues",
            "Yawning, eye rubbing, looking away, and fussiness emerge as recognizable signs of sleepiness.",
            "AAP",
            "Learn baby's drowsy cues and begin putting them down sleepy but awake to start building self-settling skills.",
            false,
        ),
        entry(
            6,
            SocialEmotional,
            "Reliably smiles in response to faces",
            "By 6 weeks most babies smile deliberately in response to a parent's face and voice, marking a key social milestone.",
            "CDC",
            "Smile back every time. Reciprocal smiling strengthens attachment and encourages further social development.",
            false,
        ),
        entry(
            6,
            Cognitive,
            "Shows interest in novel stimuli",
            "Baby looks longer at new objects or sounds compared to familiar ones, demonstrating early habituation and memory.",
            "CDC",
            "Introduce one new simple toy or image at a time. Rotate items to keep stimulation fresh without overwhelming baby.",
            false,
        ),
        // Weeks 7-8 (two months)
        entry(
            7,
            Motor,
            "Holds head at 45 degrees during tummy time",
            "Neck and upper-back strength improves so that baby can maintain a 45-degree head lift for several seconds.",
            "AAP",
            "Aim for a total of 15-30 minutes of tummy time spread throughout the day in short sessions.",
            false,
        ),
        entry(
            8,
            Motor,
            "Opens and closes hands intentionally",
            "The palmar grasp reflex fades and baby begins to open and close their fists on their own, exploring their hands.",
            "CDC",
            "Place lightweight rattles or soft toys in baby's hand. They may hold briefly before dropping.",
            false,
        ),
        entry(
            8,
            Motor,
            "Persistent fisting with no hand opening",
            "If a baby keeps both hands tightly fisted at all times by 8 weeks with no voluntary opening, this may suggest increased muscle tone worth evaluating.",
            "AAP",
            "If baby's hands are always tightly clenched and resist gentle opening, mention it at the 2-month well visit.",
            true,
        ),
        entry(
            8,
            Sensory,
            "Begins to notice own hands",
            "Baby discovers their hands visually, staring at them as they move. This is an important step in body awareness.",
            "CDC",
            "Let baby go bare-handed (no mittens) so they can see and explore their fingers.",
            false,
        ),
        entry(
            7,
            Sensory,
            "Turns head toward sounds",
            "Baby reliably turns their head toward a familiar voice or interesting sound, showing improved auditory localization.",
            "AAP",
            "Call baby's name from different sides and watch them turn. Use gentle rattles to encourage sound localization.",
            false,
        ),
        entry(
            8,
            Communication,
            "Coos and gurgles in back-and-forth exchanges",
            "Two-month-olds engage in proto-conversations: cooing when spoken to, pausing, and cooing again in a turn-taking pattern.",
            "CDC",
            "Have 'conversations' with baby: speak a short phrase, then wait. Respond enthusiastically when they vocalize back.",
            false,
        ),
        entry(
            8,
            Feeding,
            "Settles into a more predictable feeding pattern",
            "By 2 months many babies space feeds more evenly, roughly every 2.5-3.5 hours for breastfed and 3-4 hours for formula-fed infants.",
            "AAP",
            "Continue feeding on demand, but you may notice a loose schedule emerging. Follow baby's cues, not the clock.",
            false,
        ),
        entry(
            8,
            Sleep,
            "One longer nighttime stretch (4-6 hours)",
            "Some babies begin producing one longer unbroken sleep stretch at night, often 4-6 hours, although frequent waking is still completely normal.",
            "AAP",
            "Maintain a consistent bedtime routine: bath, feed, dim room, lullaby. Do not feel pressured if baby is not yet sleeping long stretches.",
            false,
        ),
        entry(
            8,
            SocialEmotional,
            "Responds with excitement to familiar people",
            "Baby may kick legs, wave arms, and coo excitedly when a familiar caregiver approaches or speaks.",
            "CDC",
            "Greet baby warmly and with enthusiasm. Narrate what you are about to do; this builds trust and predictability.",
            false,
        ),
        entry(
            8,
            Cognitive,
            "Briefly watches a toy that moves out of sight",
            "Baby's gaze may linger on the spot where an object disappeared for a moment, an early precursor to object permanence.",
            "CDC",
            "Play gentle peek-a-boo games: cover your face briefly, then reappear with a smile.",
            false,
        ),
        // Weeks 9-10
        entry(
            9,
            Motor,
            "Bears some weight on legs when held upright",
            "When held in a standing position on a firm surface, baby may briefly push down with their legs.",
            "AAP",
            "Support baby under the arms and let them 'stand' on your lap for a few seconds. This strengthens leg muscles.",
            false,
        ),
        entry(
            10,
            Motor,
            "Lifts head to 90 degrees during tummy time",
            "Baby can now push up and hold their head upright at approximately 90 degrees, looking around during tummy time.",
            "CDC",
            "Place toys in a semicircle during tummy time to encourage head turning and reaching.",
            false,
        ),
        entry(
            10,
            Motor,
            "Swipes at dangling objects",
            "Baby begins to bat at objects hung within reach, although aiming is still imprecise.",
            "CDC",
            "Use a play gym with dangling toys at chest level. Celebrate when baby connects with a toy.",
            false,
        ),
        entry(
            9,
            Sensory,
            "Tracks a moving object through 180 degrees",
            "Baby can follow a slowly moving object from one side all the way to the other, demonstrating full horizontal tracking.",
            "AAP",
            "Move a toy slowly in a full arc. If eyes consistently fail to follow past midline, consult your pediatrician.",
            false,
        ),
        entry(
            9,
            Communication,
            "Vocalizes when spoken to",
            "Baby responds to speech directed at them with increased cooing, squealing, or vowel-like sounds.",
            "CDC",
            "Use parentese (higher pitch, slower pace, exaggerated intonation); research shows babies attend more closely to this speech style.",
            false,
        ),
        entry(
            10,
            Communication,
            "Laughs or chuckles for the first time",
            "Some babies produce their first laugh between 9 and 12 weeks, often in response to playful interaction.",
            "CDC",
            "Try gentle tickles, funny faces, or surprise sounds. Every baby's sense of humor is different.",
            false,
        ),
        entry(
            10,
            Feeding,
            "Takes 4-5 oz per bottle feed",
            "Formula-fed babies often increase to 4-5 ounces per feed, while breastfed babies become more efficient and may finish feeds faster.",
            "AAP",
            "Watch for satiety cues: turning away, slowing sucking, or releasing the nipple. Never force baby to finish a bottle.",
            false,
        ),
        entry(
            9,
            Sleep,
            "Nap patterns begin to emerge",
            "Baby may start to consolidate daytime sleep into 3-4 somewhat predictable nap periods.",
            "AAP",
            "Watch for awake windows of about 60-90 minutes. Put baby down for a nap at the first signs of tiredness.",
            false,
        ),
        entry(
            10,
            SocialEmotional,
            "Shows preference for primary caregivers",
            "Baby clearly differentiates familiar caregivers from strangers and may fuss when held by someone unfamiliar.",
            "CDC",
            "This preference is healthy. Give baby time to warm up to new people. Have the new person talk gently before holding.",
            false,
        ),
        entry(
            9,
            Cognitive,
            "Anticipates routine events",
            "Baby may show excitement (kicking, cooing) when they recognize the start of a familiar routine such as feeding preparation.",
            "AAP",
            "Keep routines consistent. Narrate steps ('Time for your bath!') to reinforce anticipation and security.",
            false,
        ),
        // Weeks 11-12 (three months)
        entry(
            11,
            Motor,
            "Brings hands together at midline",
            "Baby clasps hands together in front of the body and may bring them to their mouth, showing improving coordination.",
            "CDC",
            "Offer safe teething toys or rattles that baby can grasp with both hands and bring to the mouth.",
            false,
        ),
        entry(
            12,
            Motor,
            "Supports upper body on arms during tummy time",
            "Baby can push up on extended arms during tummy time, lifting the head and chest well off the surface.",
            "AAP",
            "Encourage longer tummy-time sessions (up to 60 minutes total per day). Place motivating toys just out of reach.",
            false,
        ),
        entry(
            12,
            Motor,
            "No head control by 3 months",
            "If baby still has very poor head control, cannot lift the head during tummy time, or the head consistently falls to one side, this warrants evaluation.",
            "AAP",
            "Discuss with your pediatrician at the 3-month or next well visit. Early physical therapy can be very effective.",
            true,
        ),
        entry(
            12,
            Sensory,
            "Reaches for and grasps toys",
            "By 3 months, many babies can coordinate looking at an object and reaching for it, sometimes successfully grasping it.",
            "CDC",
            "Offer brightly colored toys within reach. Cheer when baby successfully grasps something to encourage repetition.",
            false,
        ),
        entry(
            11,
            Sensory,
            "Eyes should move together consistently",
            "Occasional crossing of the eyes in the first weeks is normal, but by 3 months the eyes should align and track together. Persistent crossing (strabismus) needs evaluation.",
            "AAP",
            "If one or both eyes consistently turn inward or outward, schedule an appointment with a pediatric ophthalmologist.",
            true,
        ),
        entry(
            11,
            Communication,
            "Squeals and makes vowel strings",
            "Baby produces longer strings of vowel sounds ('aah-ooh-eee') and may squeal with delight.",
            "CDC",
            "Mirror baby's sounds and add a new one. Read simple board books aloud, pointing at pictures.",
            false,
        ),
        entry(
            12,
            Communication,
            "Babbles with consonant-like sounds emerging",
            "Some babies begin to add consonant-like sounds (g, k, b) to their vowel cooing, producing early babble.",
            "CDC",
            "Repeat baby's babbles back and expand on them. 'Yes, ba-ba! Are you telling me a story?'",
            false,
        ),
        entry(
            12,
            Communication,
            "No cooing or vocalization by 3 months",
            "If baby has not produced any cooing, gurgling, or vowel sounds by 12 weeks, this may indicate a hearing or developmental concern.",
            "AAP",
            "Request a hearing re-evaluation and discuss speech-language development with your pediatrician.",
            true,
        ),
        entry(
            12,
            Feeding,
            "Feeds become shorter and more efficient",
            "Breastfed babies may finish feeds in 10-15 minutes per side as they become more efficient. Formula-fed babies take about 5-6 oz per feed.",
            "AAP",
            "A faster feed does not mean baby is not getting enough. Monitor weight gain and diaper output for reassurance.",
            false,
        ),
        entry(
            12,
            Sleep,
            "May sleep 5-6 hour stretches at night",
            "Many 3-month-olds can sleep a 5-6 hour stretch at night. Total sleep is roughly 14-16 hours per day including naps.",
            "AAP",
            "If baby is sleeping longer at night, there is no need to wake for feeds if weight gain is on track. Continue safe sleep environment.",
            false,
        ),
        entry(
            11,
            Sleep,
            "Circadian rhythm developing",
            "Melatonin production begins to establish a day-night cycle. Baby starts to consolidate more sleep to nighttime hours.",
            "CDC",
            "Keep mornings bright and active, evenings dim and calm. A consistent bedtime between 7-8 PM supports rhythm development.",
            false,
        ),
        entry(
            12,
            SocialEmotional,
            "Enjoys interactive play",
            "Baby actively participates in play: smiling, laughing, vocalizing, and maintaining eye contact during games.",
            "CDC",
            "Play peek-a-boo, sing action songs, and make funny noises. Follow baby's lead; if they look away, they need a break.",
            false,
        ),
        entry(
            12,
            SocialEmotional,
            "Does not respond to people or smile by 3 months",
            "If baby rarely makes eye contact, does not smile, and shows little interest in faces or voices by 3 months, discuss this with your pediatrician.",
            "CDC",
            "Bring up these observations at your next well-child visit. Early intervention services can support development.",
            true,
        ),
        entry(
            11,
            Cognitive,
            "Explores cause and effect",
            "Baby starts to notice that their actions produce results: batting a toy makes it move, shaking a rattle makes sound.",
            "CDC",
            "Provide toys that respond to touch: rattles, crinkle toys, or play gyms with hanging elements.",
            false,
        ),
        entry(
            12,
            Cognitive,
            "Imitates some facial expressions",
            "Baby may try to copy an adult who opens their mouth wide or sticks out their tongue, showing early imitation ability.",
            "AAP",
            "Sit face-to-face and slowly make exaggerated expressions. Give baby plenty of time to try to imitate you.",
            false,
        ),
        // Weeks 13-14 (entering four months)
        entry(
            13,
            Motor,
            "Steadier head control when held upright",
            "Baby holds their head steady and centered when sitting supported or held upright, with much less wobbling.",
            "AAP",
            "Practice supported sitting on your lap. Hold baby at the hips and let them work on balancing their head and trunk.",
            false,
        ),
        entry(
            13,
            Motor,
            "Reaches for objects with both hands",
            "Baby actively reaches for toys using both arms, though accuracy is still developing. May rake at objects with open fingers.",
            "CDC",
            "Hold toys at different angles and distances to encourage reaching in various directions. Celebrate successful grabs.",
            false,
        ),
        entry(
            14,
            Motor,
            "Pushes up on extended arms during tummy time",
            "Baby can fully extend their arms during tummy time, lifting head and chest well off the surface and looking around with good control.",
            "AAP",
            "During tummy time, place toys in a wide arc to encourage weight shifting and pivoting. Aim for 60+ minutes total per day.",
            false,
        ),
        entry(
            14,
            Motor,
            "May begin to roll from tummy to back",
            "Some babies make their first roll (usually tummy to back first) around this age by pushing up and tipping to one side.",
            "CDC",
            "Never leave baby unattended on elevated surfaces. If baby hasn't rolled yet, that's normal; it can happen anytime between 3 and 5 months.",
            false,
        ),
        entry(
            13,
            Sensory,
            "Color vision improving significantly",
            "Baby can now distinguish a wider range of colors and shows clear preferences for brighter, more saturated hues.",
            "AAP",
            "Introduce colorful toys and board books. Point to and name colors during play; it all builds language too.",
            false,
        ),
        entry(
            14,
            Sensory,
            "Explores objects by mouthing",
            "Baby brings nearly everything to their mouth. Mouthing is a primary way babies explore texture, shape, and temperature at this age.",
            "CDC",
            "Ensure toys are clean and too large to be a choking hazard. Offer a variety of safe textures: silicone, fabric, wood.",
            false,
        ),
        entry(
            13,
            Communication,
            "Babbles with varied consonant-vowel combinations",
            "Baby produces longer babble strings mixing consonants and vowels (ba-ba, ga-ga, ma-ma) with varied intonation patterns.",
            "CDC",
            "Respond to babbles as if they are real words. 'Oh, you said ba-ba! Tell me more!' This encourages continued vocalization.",
            false,
        ),
        entry(
            14,
            Communication,
            "Squeals with delight during play",
            "Baby produces high-pitched squeals and excited vocalizations during enjoyable interactions, showing a growing range of emotional expression through sound.",
            "CDC",
            "Play interactive games that build anticipation, like 'I'm gonna get you!' with a gentle tickle at the end.",
            false,
        ),
        entry(
            13,
            Feeding,
            "Feeding routine well established",
            "Most babies have a fairly predictable feeding pattern. Breastfed babies are very efficient; formula-fed babies take about 5-6 oz per feed, 5-6 times per day.",
            "AAP",
            "Continue to follow hunger cues rather than a strict schedule. Solid foods are not recommended until around 6 months.",
            false,
        ),
        entry(
            14,
            Feeding,
            "Increased distraction during feeds",
            "Baby becomes more aware of surroundings and may pull off the breast or bottle to look around, especially when there is activity nearby.",
            "AAP",
            "Feed in a calm, quiet environment if baby is easily distracted. A nursing necklace can help maintain focus during breastfeeding.",
            false,
        ),
        entry(
            13,
            Sleep,
            "Sleep regression may begin",
            "The well-known '4-month sleep regression' often starts around 13-14 weeks as baby's sleep cycles mature to a more adult-like pattern with lighter sleep stages.",
            "AAP",
            "Increased night waking is temporary and normal. Stay consistent with your bedtime routine. Avoid introducing new sleep associations out of desperation.",
            false,
        ),
        entry(
            14,
            Sleep,
            "Naps consolidating to 3-4 per day",
            "Daytime sleep is becoming more organized with 3-4 distinct naps. Awake windows extend to about 1.5-2 hours.",
            "AAP",
            "Watch for tired cues after 1.5-2 hours of awake time. A short wind-down routine before naps (diaper change, song, dark room) can help.",
            false,
        ),
        entry(
            13,
            SocialEmotional,
            "Initiates social interaction",
            "Baby actively seeks attention by cooing, smiling, or fussing when a caregiver is nearby but not engaging. This marks a shift from reactive to proactive socializing.",
            "CDC",
            "Respond when baby 'calls' for your attention. This teaches them that communication is effective and worthwhile.",
            false,
        ),
        entry(
            14,
            SocialEmotional,
            "Laughs out loud regularly",
            "Belly laughs become more common and baby may laugh in response to specific games, sounds, or facial expressions.",
            "CDC",
            "Find what makes your baby laugh and repeat it! Common triggers: peek-a-boo, funny sounds, gentle bouncing, and blowing raspberries.",
            false,
        ),
        entry(
            13,
            Cognitive,
            "Recognizes familiar objects",
            "Baby shows recognition of familiar toys or objects by reaching for them preferentially or showing excitement when they appear.",
            "CDC",
            "Keep a few favorite toys in rotation. Introduce new objects one at a time and let baby explore them thoroughly.",
            false,
        ),
        entry(
            14,
            Cognitive,
            "Watches faces intently and studies expressions",
            "Baby spends extended time studying facial expressions, looking from eyes to mouth and back, learning to read emotional cues.",
            "AAP",
            "Use exaggerated facial expressions during interaction. Name emotions: 'Look, Mama is happy! See my big smile?'",
            false,
        ),
        // Weeks 15-16 (four months)
        entry(
            15,
            Motor,
            "Rolls from tummy to back consistently",
            "Baby can roll from front to back reliably. Some may also begin attempting to roll from back to tummy, though this typically comes a few weeks later.",
            "CDC",
            "Always place baby on a safe floor surface for play. Stop swaddling for sleep if you haven't already, as baby needs free arms to roll safely.",
            false,
        ),
        entry(
            16,
            Motor,
            "Grasps objects purposefully with whole hand",
            "Baby uses a raking or palmar grasp to pick up toys deliberately. They can hold a toy, bring it to their mouth, and transfer it between hands with effort.",
            "AAP",
            "Offer toys of different sizes and shapes. Rattles, teething rings, and soft blocks are great for practicing grasp and manipulation.",
            false,
        ),
        entry(
            16,
            Motor,
            "No reaching or grasping by 4 months",
            "If baby is not reaching for or attempting to grasp objects by 4 months, or shows very asymmetric use of the hands, this warrants evaluation.",
            "AAP",
            "Discuss with your pediatrician at the 4-month well visit. Occupational therapy referral may be recommended.",
            true,
        ),
        entry(
            15,
            Motor,
            "Mini push-ups and pivoting during tummy time",
            "Baby pushes up high on extended arms and may pivot in a circle on their tummy, reaching for toys in different directions.",
            "CDC",
            "Place toys in a circle around baby during tummy time to encourage pivoting. This builds core and shoulder strength needed for crawling later.",
            false,
        ),
        entry(
            15,
            Sensory,
            "Depth perception beginning to develop",
            "Binocular vision is improving and baby is starting to develop depth perception, reaching more accurately for objects at varying distances.",
            "AAP",
            "Play games where you move toys closer and farther away. Stack a few soft blocks and let baby knock them over.",
            false,
        ),
        entry(
            16,
            Sensory,
            "Responds to own name",
            "Baby begins to turn or look when their name is called, showing they recognize the sound pattern as referring to them.",
            "CDC",
            "Use your baby's name frequently during daily routines. If there is no response to name by 4 months, mention it to your pediatrician.",
            false,
        ),
        entry(
            16,
            Sensory,
            "Does not respond to sounds or own name by 4 months",
            "If baby consistently does not turn toward sounds or show any response when their name is called, this may indicate a hearing concern.",
            "AAP",
            "Request a hearing evaluation from your pediatrician. Early detection of hearing issues is critical for speech and language development.",
            true,
        ),
        entry(
            15,
            Communication,
            "Babbling becomes more speech-like",
            "Baby's babbling takes on the rhythm and intonation of real speech, with rising and falling pitch patterns that sound like questions and statements.",
            "CDC",
            "Have 'conversations' where you respond to baby's babble as though they said something meaningful. This teaches conversational rhythm.",
            false,
        ),
        entry(
            16,
            Communication,
            "Blows raspberries and experiments with lip sounds",
            "Baby discovers they can make sounds with their lips: blowing raspberries, smacking lips, and making 'brrr' sounds. This builds oral motor control for later speech.",
            "CDC",
            "Blow raspberries back! This is great oral motor practice and babies find it hilarious. It also exercises muscles used in feeding and future speech.",
            false,
        ),
        entry(
            15,
            Feeding,
            "Shows interest in what others are eating",
            "Baby may watch intently when others eat, follow food from plate to mouth, and open their mouth in imitation. This does not mean they are ready for solids yet.",
            "AAP",
            "Interest in food is normal but not a readiness sign on its own. Wait until around 6 months and when baby can sit with support before starting solids.",
            false,
        ),
        entry(
            16,
            Feeding,
            "Takes 6-8 oz per bottle feed",
            "Formula-fed babies typically take 6-8 ounces per feed, 4-5 times per day. Breastfed babies continue to self-regulate efficiently at the breast.",
            "AAP",
            "Total daily intake should be around 24-32 oz of formula or equivalent breast milk. Continue to follow baby's cues rather than forcing amounts.",
            false,
        ),
        entry(
            15,
            Sleep,
            "4-month sleep regression may peak",
            "Sleep disruption from maturing sleep cycles may peak around 15-16 weeks. Baby may wake more frequently and have difficulty falling back to sleep.",
            "AAP",
            "Stay consistent with routines. This regression is permanent brain maturation, not a phase to 'get through.' It's a good time to focus on healthy sleep habits.",
            false,
        ),
        entry(
            16,
            Sleep,
            "Total sleep around 14-15 hours per day",
            "By 4 months, most babies sleep 10-12 hours at night (with wakings) and 3-4 hours during the day across 3-4 naps.",
            "AAP",
            "If night sleep is very disrupted, ensure baby is getting enough daytime sleep. An overtired baby actually sleeps worse at night.",
            false,
        ),
        entry(
            15,
            SocialEmotional,
            "Shows a range of emotions clearly",
            "Baby's emotional expressions become more distinct and readable: joy, frustration, excitement, boredom, and displeasure are all clearly communicated.",
            "CDC",
            "Name baby's emotions as you see them: 'You look frustrated! Let me help.' This builds emotional vocabulary over time.",
            false,
        ),
        entry(
            16,
            SocialEmotional,
            "Enjoys looking at self in mirror",
            "Baby is fascinated by their reflection, smiling, cooing, and reaching toward the mirror. They don't yet recognize it as themselves.",
            "CDC",
            "Place an unbreakable baby mirror at tummy-time level. Sit together in front of a mirror and point out features: 'There's your nose!'",
            false,
        ),
        entry(
            16,
            SocialEmotional,
            "No social engagement or emotional expression by 4 months",
            "If baby rarely smiles, does not laugh, shows no interest in people, or does not express a range of emotions by 4 months, this should be discussed with your pediatrician.",
            "AAP",
            "Raise these observations at the 4-month well visit. Your pediatrician may recommend developmental screening.",
            true,
        ),
        entry(
            15,
            Cognitive,
            "Improved hand-eye coordination",
            "Baby can see a toy, reach for it, and grasp it in one smooth motion, a significant coordination milestone combining vision and motor planning.",
            "CDC",
            "Offer toys at varying distances and angles. Let baby practice reaching while lying on their back, sitting supported, and during tummy time.",
            false,
        ),
        entry(
            16,
            Cognitive,
            "Begins to show memory for people and places",
            "Baby may show excitement when arriving at a familiar place or seeing a regular caregiver, indicating growing memory capacity.",
            "AAP",
            "Narrate your routines and where you are going. 'We're going to Grandma's house!' Familiar narration strengthens memory associations.",
            false,
        ),
    ]
}
