use crate::models::Doctor;

const PLACEHOLDER_AVATAR: &str = "/api/placeholder/48/48";

/// (id, name, phone, expertise, gender, session mode, fee)
const DOCTORS: [(&str, &str, &str, &str, &str, &str, &str); 10] = [
    ("1", "Dr. Rajesh Kumar", "+91 98765 43210", "Gynecology", "Male", "In-Person & Online", "₹1500"),
    ("2", "Dr. Priya Sharma", "+91 98765 43211", "IVF Specialist", "Female", "Online", "₹2200"),
    ("3", "Dr. Amit Patel", "+91 98765 43212", "Psychologist", "Male", "In-Person", "₹1200"),
    ("4", "Dr. Sneha Gupta", "+91 98765 43213", "Psychiatrist", "Female", "In-Person & Online", "₹1800"),
    ("5", "Dr. Vikram Singh", "+91 98765 43214", "Dermatologist", "Male", "Online", "₹1600"),
    ("6", "Dr. Kavita Reddy", "+91 98765 43215", "Gynaecology", "Female", "In-Person", "₹1400"),
    ("7", "Dr. Manoj Agarwal", "+91 98765 43216", "IVF Specialist", "Male", "In-Person & Online", "₹2500"),
    ("8", "Dr. Ritu Verma", "+91 98765 43217", "Psychologist", "Female", "Online", "₹1100"),
    ("9", "Dr. Suresh Jain", "+91 98765 43218", "Psychiatrist", "Male", "In-Person", "₹2000"),
    ("10", "Dr. Anita Chopra", "+91 98765 43219", "Dermatologist", "Female", "In-Person & Online", "₹1700"),
];

/// The practice's doctor roster.
pub fn seed_doctors() -> Vec<Doctor> {
    DOCTORS
        .iter()
        .map(|&(id, name, phone, expertise, gender, session_mode, fee)| Doctor {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            expertise: expertise.to_string(),
            gender: gender.to_string(),
            session_mode: session_mode.to_string(),
            session_fee: fee.to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
        })
        .collect()
}
